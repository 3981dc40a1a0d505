//! RustyBeacon - Eddystone-URL beacons over raw Bluetooth HCI
//!
//! This library encodes a URL into an Eddystone-URL frame and drives a
//! Bluetooth LE controller through the HCI (Host Controller Interface) to
//! start or stop advertising it on Unix systems.

pub mod beacon;
pub mod config;
pub mod eddystone;
pub mod error;
pub mod hci;

// Re-export common types for convenience
pub use beacon::{disable_advertising, set_eddystone_url, BeaconController, BeaconState};
pub use config::BeaconConfig;
pub use eddystone::{encode_url, AdFlags, AdvertisingData};
pub use error::{ConfigError, EncodeError, Error, HciError};
pub use hci::{open_device, HciCommand, HciEvent, HciSocket, HciTransport};
