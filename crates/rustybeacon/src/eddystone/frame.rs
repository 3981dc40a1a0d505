//! Advertising data carrying an Eddystone-URL frame
//!
//! Layout sent to the controller:
//!
//! ```text
//! 02 01 1a          flags
//! 03 03 aa fe       complete list of 16-bit service UUIDs: Eddystone
//! LL 16 aa fe       service data for Eddystone, LL = 5 + payload length
//! 10 ed             URL frame type, calibrated TX power
//! ..                encoded URL
//! ```

use crate::eddystone::constants::*;
use crate::error::EncodeError;
use crate::hci::constants::LE_ADVERTISING_DATA_MAX_LEN;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Flags AD structure bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdFlags: u8 {
        const LE_LIMITED_DISCOVERABLE = 0x01;
        const LE_GENERAL_DISCOVERABLE = 0x02;
        const BR_EDR_NOT_SUPPORTED = 0x04;
        const SIMULTANEOUS_LE_BR_EDR_CONTROLLER = 0x08;
        const SIMULTANEOUS_LE_BR_EDR_HOST = 0x10;
    }
}

impl AdFlags {
    /// Flags advertised with an Eddystone-URL frame (0x1a)
    pub const EDDYSTONE: AdFlags = AdFlags::LE_GENERAL_DISCOVERABLE
        .union(AdFlags::SIMULTANEOUS_LE_BR_EDR_CONTROLLER)
        .union(AdFlags::SIMULTANEOUS_LE_BR_EDR_HOST);
}

/// A complete advertising data record, at most 31 bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisingData {
    bytes: Vec<u8>,
}

impl AdvertisingData {
    /// Builds the advertising data for an encoded Eddystone-URL payload
    pub fn eddystone_url(payload: &[u8]) -> Result<Self, EncodeError> {
        let total = EDDYSTONE_URL_HEADER_LEN + payload.len();
        if payload.is_empty()
            || payload.len() > MAX_URL_PAYLOAD_LEN
            || total > LE_ADVERTISING_DATA_MAX_LEN
        {
            return Err(EncodeError::PayloadTooLong(payload.len()));
        }

        let uuid = EDDYSTONE_SERVICE_UUID.to_le_bytes();
        let mut bytes = Vec::with_capacity(total);

        bytes.extend_from_slice(&[2, ADV_TYPE_FLAGS, AdFlags::EDDYSTONE.bits()]);

        bytes.extend_from_slice(&[3, ADV_TYPE_16BIT_SERVICE_UUID_COMPLETE]);
        bytes.extend_from_slice(&uuid);

        bytes.extend_from_slice(&[
            (SERVICE_DATA_BASE_LEN + payload.len()) as u8,
            ADV_TYPE_SERVICE_DATA_16BIT,
        ]);
        bytes.extend_from_slice(&uuid);
        bytes.extend_from_slice(&[EDDYSTONE_URL, EDDYSTONE_TX_POWER as u8]);

        bytes.extend_from_slice(payload);

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The encoded URL following the header
    pub fn payload(&self) -> &[u8] {
        &self.bytes[EDDYSTONE_URL_HEADER_LEN..]
    }
}

impl AsRef<[u8]> for AdvertisingData {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for AdvertisingData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}
