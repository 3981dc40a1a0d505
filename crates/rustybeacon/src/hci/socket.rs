//! HCI Socket implementation for Bluetooth communication
//!
//! This module provides a wrapper around the raw HCI socket interface,
//! allowing for communication with Bluetooth controllers.

use crate::error::HciError;
use crate::hci::constants::*;
use crate::hci::packet::{HciCommand, HciEvent};
use std::os::unix::io::{AsRawFd, RawFd};
use std::time::{Duration, Instant};

// Bluetooth socket constants
pub(crate) const AF_BLUETOOTH: i32 = 31;
pub(crate) const BTPROTO_HCI: i32 = 1;
const HCI_CHANNEL_RAW: i32 = 0;

/// Represents an HCI socket bound to one controller
#[derive(Debug)]
pub struct HciSocket {
    fd: RawFd,
    dev_id: u16,
}

// Define the sockaddr_hci structure
#[repr(C)]
struct SockaddrHci {
    hci_family: libc::sa_family_t,
    hci_dev: u16,
    hci_channel: u16,
}

/// Event filter installed on a raw HCI socket (`struct hci_filter`)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HciFilter {
    pub type_mask: u32,
    pub event_mask: [u32; 2],
    pub opcode: u16,
}

impl HciFilter {
    /// Accept packets of the given type
    pub fn set_packet_type(&mut self, packet_type: u8) {
        self.type_mask |= 1 << (packet_type as u32 & 31);
    }

    /// Accept events with the given event code
    pub fn set_event(&mut self, event_code: u8) {
        let bit = event_code as usize & 63;
        self.event_mask[bit >> 5] |= 1 << (bit & 31);
    }

    /// Filter passing command completion events, as used for request/response exchanges
    pub fn command_responses() -> Self {
        let mut filter = Self::default();
        filter.set_packet_type(HCI_EVENT_PKT);
        filter.set_event(EVT_CMD_COMPLETE);
        filter.set_event(EVT_CMD_STATUS);
        filter
    }
}

impl HciSocket {
    /// The controller index this socket is bound to
    pub fn dev_id(&self) -> u16 {
        self.dev_id
    }

    /// Opens a new HCI socket
    ///
    /// # Arguments
    ///
    /// * `dev_id` - The device ID to open (0 for the first device)
    ///
    /// # Returns
    ///
    /// A new `HciSocket` instance or an error if the socket could not be opened
    pub fn open(dev_id: u16) -> Result<Self, HciError> {
        let fd = unsafe { libc::socket(AF_BLUETOOTH, libc::SOCK_RAW, BTPROTO_HCI) };

        if fd < 0 {
            return Err(HciError::SocketError(std::io::Error::last_os_error()));
        }

        let addr = SockaddrHci {
            hci_family: AF_BLUETOOTH as libc::sa_family_t,
            hci_dev: dev_id,
            hci_channel: HCI_CHANNEL_RAW as u16,
        };

        let result = unsafe {
            libc::bind(
                fd,
                &addr as *const _ as *const libc::sockaddr,
                std::mem::size_of::<SockaddrHci>() as libc::socklen_t,
            )
        };

        if result < 0 {
            let err = std::io::Error::last_os_error();
            unsafe { libc::close(fd) };
            return Err(HciError::BindError(err));
        }

        log::debug!("opened raw HCI socket for hci{}", dev_id);
        Ok(HciSocket { fd, dev_id })
    }

    /// Wraps an already open descriptor, which the socket then owns
    #[cfg(test)]
    pub(crate) fn from_raw_fd(fd: RawFd, dev_id: u16) -> Self {
        HciSocket { fd, dev_id }
    }

    /// Installs an event filter on the socket
    pub fn set_filter(&self, filter: &HciFilter) -> Result<(), HciError> {
        let result = unsafe {
            libc::setsockopt(
                self.fd,
                SOL_HCI,
                HCI_FILTER,
                filter as *const HciFilter as *const libc::c_void,
                std::mem::size_of::<HciFilter>() as libc::socklen_t,
            )
        };

        if result < 0 {
            return Err(HciError::SocketError(std::io::Error::last_os_error()));
        }
        Ok(())
    }

    /// Read an HCI event from the socket
    pub fn read_event(&self) -> Result<HciEvent, HciError> {
        let mut buffer = [0u8; HCI_MAX_EVENT_SIZE];

        let bytes_read = unsafe {
            libc::read(
                self.fd,
                buffer.as_mut_ptr() as *mut libc::c_void,
                buffer.len(),
            )
        };

        if bytes_read < 0 {
            return Err(HciError::ReceiveError(std::io::Error::last_os_error()));
        }

        if bytes_read < 3 || buffer[0] != HCI_EVENT_PKT {
            return Err(HciError::InvalidPacketFormat);
        }

        HciEvent::parse(&buffer[1..bytes_read as usize]).ok_or(HciError::InvalidPacketFormat)
    }

    /// Waits until the socket is readable or `timeout` elapses
    ///
    /// Returns `false` on timeout.
    fn wait_readable(&self, timeout: Duration) -> Result<bool, HciError> {
        let mut pfd = libc::pollfd {
            fd: self.fd,
            events: libc::POLLIN,
            revents: 0,
        };
        let millis = timeout.as_millis().min(libc::c_int::MAX as u128) as libc::c_int;

        loop {
            let result = unsafe { libc::poll(&mut pfd, 1, millis) };
            if result < 0 {
                let err = std::io::Error::last_os_error();
                if err.kind() == std::io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(HciError::ReceiveError(err));
            }
            return Ok(result > 0);
        }
    }

    /// Sends an HCI command to the controller
    pub fn send_command(&self, command: &HciCommand) -> Result<(), HciError> {
        let packet = command.to_packet();
        log::debug!(
            "hci{} < {} opcode={:#06x} params={}",
            self.dev_id,
            command.name(),
            command.opcode(),
            hex::encode(&packet[4..])
        );
        match unsafe {
            libc::write(
                self.fd,
                packet.as_ptr() as *const libc::c_void,
                packet.len(),
            )
        } {
            -1 => Err(HciError::SendError(std::io::Error::last_os_error())),
            _ => Ok(()),
        }
    }

    /// Sends a command and waits for its completion
    ///
    /// Events that do not answer this command are skipped. Returns the status
    /// byte from the matching Command Complete or Command Status event.
    pub fn send_request(&self, command: &HciCommand, timeout: Duration) -> Result<u8, HciError> {
        let opcode = command.opcode();
        self.send_command(command)?;

        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !self.wait_readable(remaining)? {
                return Err(HciError::Timeout(opcode));
            }

            let event = match self.read_event() {
                Ok(event) => event,
                Err(HciError::InvalidPacketFormat) => continue,
                Err(e) => return Err(e),
            };

            if event.command_opcode() == Some(opcode) {
                let status = event
                    .command_status(opcode)
                    .ok_or(HciError::InvalidPacketFormat)?;
                log::debug!("hci{} > {} status={:#04x}", self.dev_id, command.name(), status);
                return Ok(status);
            }
        }
    }
}

impl AsRawFd for HciSocket {
    fn as_raw_fd(&self) -> RawFd {
        self.fd
    }
}

impl Drop for HciSocket {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.fd);
        }
    }
}
