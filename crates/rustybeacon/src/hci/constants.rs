//! HCI protocol constants
//!
//! This module contains constants used in the Bluetooth HCI protocol.

// HCI packet types
pub const HCI_COMMAND_PKT: u8 = 0x01;
pub const HCI_EVENT_PKT: u8 = 0x04;

// Maximum size of an HCI event packet (type byte, header and parameters)
pub const HCI_MAX_EVENT_SIZE: usize = 258;

// Common OGF (Opcode Group Field) values
pub const OGF_LE: u8 = 0x08;

// LE Command OCF values (OGF: 0x08)
pub const OCF_LE_SET_ADVERTISING_DATA: u16 = 0x0008;
pub const OCF_LE_SET_ADVERTISING_ENABLE: u16 = 0x000A;

// LE Set Advertising Data: one length byte plus 31 bytes of data
pub const LE_ADVERTISING_DATA_MAX_LEN: usize = 31;
pub const LE_SET_ADVERTISING_DATA_CP_SIZE: usize = 32;

// HCI Events
pub const EVT_CMD_COMPLETE: u8 = 0x0E;
pub const EVT_CMD_STATUS: u8 = 0x0F;

// Socket level and options
pub const SOL_HCI: i32 = 0;
pub const HCI_FILTER: i32 = 2;

// Device flags reported in hci_dev_req.dev_opt
pub const HCI_UP: u32 = 0;

// Device ioctls: _IOW('H', 201, int) and _IOR('H', 210, int)
pub const HCIDEVUP: libc::c_ulong = 0x4004_48c9;
pub const HCIGETDEVLIST: libc::c_ulong = 0x8004_48d2;

// Upper bound used by hci_get_route when listing devices
pub const HCI_MAX_DEV: usize = 16;
