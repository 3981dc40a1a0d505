//! Beacon configuration
//!
//! The configuration is an INI document. Only `url` in the `[eddystone]`
//! section is read; everything else is ignored:
//!
//! ```ini
//! [eddystone]
//! url = https://example.com
//! ```

use crate::error::ConfigError;
use std::path::Path;
use std::str::FromStr;

const EDDYSTONE_SECTION: &str = "eddystone";
const URL_KEY: &str = "url";

/// Settings consumed by the beacon
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BeaconConfig {
    /// URL to advertise; advertising is disabled when absent
    pub url: Option<String>,
}

impl BeaconConfig {
    /// Reads the configuration from an INI file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}

impl FromStr for BeaconConfig {
    type Err = ConfigError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut config = BeaconConfig::default();
        let mut section = String::new();

        for (index, raw) in text.lines().enumerate() {
            let line = strip_inline_comment(raw).trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            if let Some(rest) = line.strip_prefix('[') {
                let name = rest
                    .strip_suffix(']')
                    .ok_or(ConfigError::Parse { line: index + 1 })?;
                section = name.trim().to_string();
                continue;
            }

            let (name, value) = line
                .split_once(['=', ':'])
                .ok_or(ConfigError::Parse { line: index + 1 })?;

            if section == EDDYSTONE_SECTION && name.trim() == URL_KEY {
                config.url = Some(value.trim().to_string());
            }
        }

        Ok(config)
    }
}

/// Cuts a `;` comment that follows whitespace
fn strip_inline_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b';' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return &line[..i];
        }
    }
    line
}
