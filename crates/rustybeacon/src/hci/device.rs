//! Controller acquisition
//!
//! Brings an adapter up, finds the default controller and opens a socket
//! ready for request/response exchanges.

use crate::error::{Error, HciError};
use crate::hci::constants::*;
use crate::hci::socket::{HciFilter, HciSocket, AF_BLUETOOTH, BTPROTO_HCI};
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
struct HciDevReq {
    dev_id: u16,
    dev_opt: u32,
}

#[repr(C)]
struct HciDevListReq {
    dev_num: u16,
    dev_req: [HciDevReq; HCI_MAX_DEV],
}

/// Opens an unbound HCI socket for device ioctls
fn control_socket() -> Result<OwnedFd, HciError> {
    let fd = unsafe { libc::socket(AF_BLUETOOTH, libc::SOCK_RAW | libc::SOCK_CLOEXEC, BTPROTO_HCI) };
    if fd < 0 {
        return Err(HciError::SocketError(std::io::Error::last_os_error()));
    }
    Ok(unsafe { OwnedFd::from_raw_fd(fd) })
}

/// Brings the controller `dev_id` up
///
/// A controller that is already up is not an error.
pub fn device_up(dev_id: u16) -> Result<(), HciError> {
    let sock = control_socket()?;
    let result = unsafe { libc::ioctl(sock.as_raw_fd(), HCIDEVUP as _, dev_id as libc::c_int) };
    if result < 0 {
        let err = std::io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::EALREADY) {
            return Ok(());
        }
        return Err(HciError::IoctlError(err));
    }
    log::info!("hci{} is up", dev_id);
    Ok(())
}

/// Lists the known controllers as `(dev_id, is_up)` pairs
pub fn device_list() -> Result<Vec<(u16, bool)>, HciError> {
    let sock = control_socket()?;
    let mut req = HciDevListReq {
        dev_num: HCI_MAX_DEV as u16,
        dev_req: [HciDevReq::default(); HCI_MAX_DEV],
    };

    let result = unsafe {
        libc::ioctl(
            sock.as_raw_fd(),
            HCIGETDEVLIST as _,
            &mut req as *mut HciDevListReq,
        )
    };
    if result < 0 {
        return Err(HciError::IoctlError(std::io::Error::last_os_error()));
    }

    let count = (req.dev_num as usize).min(HCI_MAX_DEV);
    Ok(req.dev_req[..count]
        .iter()
        .map(|dr| (dr.dev_id, dr.dev_opt & (1 << HCI_UP) != 0))
        .collect())
}

/// Index of the first controller that is up
pub fn default_route() -> Result<u16, HciError> {
    first_up(&device_list()?).ok_or(HciError::NoDevice)
}

/// Whether controller `dev_id` is currently registered and up
pub fn is_device_up(dev_id: u16) -> Result<bool, HciError> {
    Ok(listed_up(&device_list()?, dev_id))
}

pub(crate) fn first_up(devices: &[(u16, bool)]) -> Option<u16> {
    devices.iter().find(|&&(_, up)| up).map(|&(dev_id, _)| dev_id)
}

pub(crate) fn listed_up(devices: &[(u16, bool)], dev_id: u16) -> bool {
    devices.iter().any(|&(id, up)| id == dev_id && up)
}

/// Acquires a controller for the beacon
///
/// With `dev_id` unset, hci0 is brought up and the first controller that is
/// up is used. A failed bring-up is only logged; opening the socket decides
/// whether the device is usable.
pub fn open_device(dev_id: Option<u16>) -> Result<HciSocket, Error> {
    let target = dev_id.unwrap_or(0);
    if let Err(e) = device_up(target) {
        log::warn!("HCIDEVUP failed for hci{}: {}", target, e);
    }

    let dev_id = match dev_id {
        Some(dev_id) => dev_id,
        None => default_route().map_err(|source| Error::DeviceUnavailable {
            dev_id: target,
            source,
        })?,
    };

    let socket =
        HciSocket::open(dev_id).map_err(|source| Error::DeviceUnavailable { dev_id, source })?;
    socket
        .set_filter(&HciFilter::command_responses())
        .map_err(|source| Error::DeviceUnavailable { dev_id, source })?;
    Ok(socket)
}
