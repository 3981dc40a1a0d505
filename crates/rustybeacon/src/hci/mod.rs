//! Bluetooth HCI (Host Controller Interface) implementation
//!
//! This module provides functionality for interacting with HCI interfaces.

pub mod constants;
pub mod device;
pub mod packet;
pub mod socket;
pub mod transport;


pub use device::open_device;
pub use packet::{HciCommand, HciEvent};
pub use socket::{HciFilter, HciSocket};
pub use transport::HciTransport;
