//! HCI packet structures and parsing
//!
//! This module contains structures and methods for handling HCI packets.

use crate::error::HciError;
use crate::hci::constants::*;
use byteorder::{ByteOrder, LittleEndian};

/// Builds a 16-bit opcode from its group and command fields
pub fn opcode(ogf: u8, ocf: u16) -> u16 {
    ((ogf as u16) << 10) | (ocf & 0x3ff)
}

/// HCI commands issued by the beacon
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HciCommand {
    // LE Commands (OGF: 0x08)
    /// Build with [`HciCommand::le_set_advertising_data`]; `data` holds at most 31 bytes
    LeSetAdvertisingData { data: Vec<u8> },
    LeSetAdvertisingEnable { enable: bool },
}

impl HciCommand {
    /// Creates an LE Set Advertising Data command
    ///
    /// Fails if `data` does not fit the 31 byte advertising payload.
    pub fn le_set_advertising_data(data: &[u8]) -> Result<Self, HciError> {
        if data.len() > LE_ADVERTISING_DATA_MAX_LEN {
            return Err(HciError::InvalidParamLength(data.len()));
        }
        Ok(Self::LeSetAdvertisingData {
            data: data.to_vec(),
        })
    }

    /// Get the OGF and OCF for this command
    pub fn opcode_parts(&self) -> (u8, u16) {
        match self {
            Self::LeSetAdvertisingData { .. } => (OGF_LE, OCF_LE_SET_ADVERTISING_DATA),
            Self::LeSetAdvertisingEnable { .. } => (OGF_LE, OCF_LE_SET_ADVERTISING_ENABLE),
        }
    }

    /// The 16-bit opcode of this command
    pub fn opcode(&self) -> u16 {
        let (ogf, ocf) = self.opcode_parts();
        opcode(ogf, ocf)
    }

    /// Short human-readable name, used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Self::LeSetAdvertisingData { .. } => "LE Set Advertising Data",
            Self::LeSetAdvertisingEnable { enable: true } => "LE Set Advertising Enable",
            Self::LeSetAdvertisingEnable { enable: false } => "LE Set Advertising Disable",
        }
    }

    /// Convert the command to its raw parameter bytes
    pub fn parameters(&self) -> Vec<u8> {
        match self {
            // Fixed-size block: significant length, then zero padded data
            Self::LeSetAdvertisingData { data } => {
                debug_assert!(
                    data.len() <= LE_ADVERTISING_DATA_MAX_LEN,
                    "advertising data is {} bytes, at most {} fit",
                    data.len(),
                    LE_ADVERTISING_DATA_MAX_LEN
                );
                let len = data.len().min(LE_ADVERTISING_DATA_MAX_LEN);
                let mut params = Vec::with_capacity(LE_SET_ADVERTISING_DATA_CP_SIZE);
                params.push(len as u8);
                params.extend_from_slice(&data[..len]);
                params.resize(LE_SET_ADVERTISING_DATA_CP_SIZE, 0);
                params
            }

            Self::LeSetAdvertisingEnable { enable } => vec![*enable as u8],
        }
    }

    /// Convert the command to a raw HCI packet
    pub fn to_packet(&self) -> Vec<u8> {
        let params = self.parameters();

        let mut packet = vec![HCI_COMMAND_PKT];
        packet.extend_from_slice(&self.opcode().to_le_bytes());
        packet.push(params.len() as u8);
        packet.extend_from_slice(&params);
        packet
    }
}

/// HCI Event packet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HciEvent {
    pub event_code: u8,
    pub parameter_total_length: u8,
    pub parameters: Vec<u8>,
}

impl HciEvent {
    /// Parse an HCI event from raw bytes
    pub fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 2 {
            return None;
        }

        let event_code = data[0];
        let parameter_total_length = data[1];

        if data.len() < (parameter_total_length as usize + 2) {
            return None;
        }

        let parameters = data[2..(parameter_total_length as usize + 2)].to_vec();

        Some(HciEvent {
            event_code,
            parameter_total_length,
            parameters,
        })
    }

    /// Opcode this event answers, for Command Complete and Command Status
    pub fn command_opcode(&self) -> Option<u16> {
        let params = &self.parameters;
        match self.event_code {
            EVT_CMD_COMPLETE if params.len() >= 3 => Some(LittleEndian::read_u16(&params[1..3])),
            EVT_CMD_STATUS if params.len() >= 4 => Some(LittleEndian::read_u16(&params[2..4])),
            _ => None,
        }
    }

    /// Status reported for `opcode`, if this event answers that command
    pub fn command_status(&self, opcode: u16) -> Option<u8> {
        if self.command_opcode() != Some(opcode) {
            return None;
        }
        match self.event_code {
            EVT_CMD_COMPLETE => self.parameters.get(3).copied(),
            _ => self.parameters.first().copied(),
        }
    }
}
