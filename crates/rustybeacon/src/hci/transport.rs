//! Request/response transport seam between the beacon logic and a controller

use crate::error::HciError;
use crate::hci::device;
use crate::hci::packet::HciCommand;
use crate::hci::socket::HciSocket;
use std::time::Duration;

/// A controller that executes one command at a time
pub trait HciTransport {
    /// Index of the controller behind this transport
    fn device_id(&self) -> u16;

    /// Whether the handle still refers to an open controller
    fn is_available(&self) -> bool;

    /// Sends `command` and blocks until its status arrives or `timeout` passes
    fn send_request(&mut self, command: &HciCommand, timeout: Duration) -> Result<u8, HciError>;
}

impl HciTransport for HciSocket {
    fn device_id(&self) -> u16 {
        self.dev_id()
    }

    /// Asks the kernel whether the bound controller is still up
    fn is_available(&self) -> bool {
        match device::is_device_up(self.dev_id()) {
            Ok(up) => up,
            Err(e) => {
                log::debug!("hci{}: device list unavailable: {}", self.dev_id(), e);
                false
            }
        }
    }

    fn send_request(&mut self, command: &HciCommand, timeout: Duration) -> Result<u8, HciError> {
        HciSocket::send_request(self, command, timeout)
    }
}
