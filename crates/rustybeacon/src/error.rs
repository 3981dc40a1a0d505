//! Error types for the rustybeacon library
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Errors that can occur when working with HCI sockets
#[derive(Error, Debug)]
pub enum HciError {
    #[error("Failed to open HCI socket: {0}")]
    SocketError(#[from] std::io::Error),

    #[error("Failed to bind to HCI device: {0}")]
    BindError(std::io::Error),

    #[error("Failed to send HCI command: {0}")]
    SendError(std::io::Error),

    #[error("Failed to receive HCI event: {0}")]
    ReceiveError(std::io::Error),

    #[error("HCI device ioctl failed: {0}")]
    IoctlError(std::io::Error),

    #[error("Timed out waiting for response to opcode {0:#06x}")]
    Timeout(u16),

    #[error("Invalid parameter length: {0}")]
    InvalidParamLength(usize),

    #[error("Invalid HCI packet format")]
    InvalidPacketFormat,

    #[error("No Bluetooth controller is up")]
    NoDevice,
}

/// Errors produced while encoding an Eddystone-URL frame
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid schema")]
    InvalidSchema,

    #[error("url too long: encoded payload is {0} bytes")]
    PayloadTooLong(usize),
}

/// Errors produced while reading the beacon configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config at line {line}")]
    Parse { line: usize },
}

/// Errors surfaced by the beacon operations
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error("{command} failed{}: {source}", status_suffix(.status))]
    ControllerCommandFailed {
        command: &'static str,
        status: Option<u8>,
        #[source]
        source: CommandFailure,
    },

    #[error("can't open hci{dev_id}: {source}")]
    DeviceUnavailable {
        dev_id: u16,
        #[source]
        source: HciError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Why a single controller command did not succeed
#[derive(Error, Debug)]
pub enum CommandFailure {
    #[error("controller returned non-zero status")]
    Status,

    #[error(transparent)]
    Transport(#[from] HciError),
}

fn status_suffix(status: &Option<u8>) -> String {
    match status {
        Some(status) => format!(" with status {:#04x}", status),
        None => String::new(),
    }
}

impl Error {
    /// Process exit status a top-level caller should terminate with
    ///
    /// | status | error |
    /// |--------|-------|
    /// | 1 | configuration could not be read |
    /// | 3 | URL cannot be encoded, or no usable controller |
    /// | 4 | a controller command failed |
    ///
    /// The beacon operations log and absorb command failures, so 4 is only
    /// seen by callers that run commands themselves and return the error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 1,
            Error::Encode(_) | Error::DeviceUnavailable { .. } => 3,
            Error::ControllerCommandFailed { .. } => 4,
        }
    }
}
