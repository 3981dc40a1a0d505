//! Eddystone-URL beacon
//!
//! Starts and stops advertising of an Eddystone-URL frame on one controller.
//! Starting always runs disable, set advertising data, enable, in that order;
//! stopping only disables.

pub mod controller;


pub use controller::{BeaconController, BeaconState, COMMAND_TIMEOUT};

use crate::error::Error;
use crate::hci::HciTransport;

/// Starts advertising `url` as an Eddystone-URL frame on `device`
pub fn set_eddystone_url<T: HciTransport>(device: &mut T, url: &str) -> Result<(), Error> {
    BeaconController::new(device)?.set_eddystone_url(url)
}

/// Stops advertising on `device`
pub fn disable_advertising<T: HciTransport>(device: &mut T) -> Result<(), Error> {
    BeaconController::new(device)?.disable_advertising()
}
