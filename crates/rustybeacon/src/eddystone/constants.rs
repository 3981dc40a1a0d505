// Eddystone frame types
pub const EDDYSTONE_UID: u8 = 0x00;
pub const EDDYSTONE_URL: u8 = 0x10;
pub const EDDYSTONE_TLM: u8 = 0x30;

// 16-bit Eddystone service UUID (0xFEAA), little endian on air
pub const EDDYSTONE_SERVICE_UUID: u16 = 0xFEAA;

// Calibrated TX power at 0 m, in dBm
pub const EDDYSTONE_TX_POWER: i8 = -19;

// Advertising Data Types
pub const ADV_TYPE_FLAGS: u8 = 0x01;
pub const ADV_TYPE_16BIT_SERVICE_UUID_COMPLETE: u8 = 0x03;
pub const ADV_TYPE_SERVICE_DATA_16BIT: u8 = 0x16;

// Longest encoded URL (schema byte plus remainder)
pub const MAX_URL_PAYLOAD_LEN: usize = 17;

// Bytes preceding the encoded URL in the advertising data
pub const EDDYSTONE_URL_HEADER_LEN: usize = 13;

// Service data length byte without the URL: type, UUID, frame type, TX power
pub const SERVICE_DATA_BASE_LEN: usize = 5;

/// URL prefixes replaced by a single byte, coded by position
///
/// Longer prefixes come first so that "http://www." is not taken as "http://".
pub const URL_SCHEMES: [&str; 4] = ["http://www.", "https://www.", "http://", "https://"];
