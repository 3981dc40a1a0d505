//! Eddystone-URL schema compression

use crate::eddystone::constants::{MAX_URL_PAYLOAD_LEN, URL_SCHEMES};
use crate::error::EncodeError;

/// Finds the schema code and prefix length for `url`
///
/// The whole prefix has to be present: "http" matches nothing.
fn match_scheme(url: &str) -> Option<(u8, usize)> {
    URL_SCHEMES
        .iter()
        .enumerate()
        .find(|(_, scheme)| url.starts_with(*scheme))
        .map(|(code, scheme)| (code as u8, scheme.len()))
}

/// Encodes a URL into an Eddystone-URL payload
///
/// The payload is the schema code followed by the rest of the URL, unchanged.
///
/// # Errors
///
/// * `InvalidSchema` if the URL starts with none of the known schemes
/// * `PayloadTooLong` if the payload would exceed 17 bytes
pub fn encode_url(url: &str) -> Result<Vec<u8>, EncodeError> {
    let (code, prefix_len) = match_scheme(url).ok_or(EncodeError::InvalidSchema)?;
    let rest = &url.as_bytes()[prefix_len..];

    let len = 1 + rest.len();
    if len > MAX_URL_PAYLOAD_LEN {
        return Err(EncodeError::PayloadTooLong(len));
    }

    let mut payload = Vec::with_capacity(len);
    payload.push(code);
    payload.extend_from_slice(rest);
    Ok(payload)
}
