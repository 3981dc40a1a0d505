//! Unit tests for Eddystone-URL encoding and frame assembly

use super::constants::*;
use super::frame::{AdFlags, AdvertisingData};
use super::url::encode_url;
use crate::error::EncodeError;

#[test]
fn test_encode_https() {
    let payload = encode_url("https://example.com").unwrap();

    let mut expected = vec![3];
    expected.extend_from_slice(b"example.com");
    assert_eq!(payload, expected);
    assert_eq!(payload.len(), 12);
}

#[test]
fn test_encode_http_www() {
    assert_eq!(encode_url("http://www.a.co").unwrap(), vec![0, b'a', b'.', b'c', b'o']);
}

#[test]
fn test_schema_table_order() {
    // "http://" is also a prefix, the www entry is checked first
    assert_eq!(encode_url("http://www.example.com").unwrap()[0], 0);
    assert_eq!(encode_url("https://www.example.com").unwrap()[0], 1);
    assert_eq!(encode_url("http://example.com").unwrap()[0], 2);
    assert_eq!(encode_url("https://example.com").unwrap()[0], 3);

    // Every code maps back to its scheme
    for (code, scheme) in URL_SCHEMES.iter().enumerate() {
        let url = format!("{}x", scheme);
        assert_eq!(encode_url(&url).unwrap(), vec![code as u8, b'x']);
    }
}

#[test]
fn test_remainder_is_verbatim() {
    // Path fragments and TLDs are not compressed
    let payload = encode_url("https://goo.gl/abc").unwrap();
    assert_eq!(&payload[1..], b"goo.gl/abc");

    // The bare scheme encodes to the code alone
    assert_eq!(encode_url("https://").unwrap(), vec![3]);
}

#[test]
fn test_invalid_schema() {
    assert_eq!(encode_url("ftp://example.com"), Err(EncodeError::InvalidSchema));
    assert_eq!(encode_url("example.com"), Err(EncodeError::InvalidSchema));
    assert_eq!(encode_url(""), Err(EncodeError::InvalidSchema));
    assert_eq!(encode_url("HTTP://example.com"), Err(EncodeError::InvalidSchema));

    // A truncated scheme is not a match
    assert_eq!(encode_url("http"), Err(EncodeError::InvalidSchema));
    assert_eq!(encode_url("https:/"), Err(EncodeError::InvalidSchema));
}

#[test]
fn test_payload_length_boundary() {
    // 16 bytes after the scheme: 17 byte payload
    let url = format!("https://{}", "a".repeat(16));
    let payload = encode_url(&url).unwrap();
    assert_eq!(payload.len(), MAX_URL_PAYLOAD_LEN);

    // 17 bytes after the scheme: 18 byte payload
    let url = format!("https://{}", "a".repeat(17));
    assert_eq!(encode_url(&url), Err(EncodeError::PayloadTooLong(18)));

    // Compression counts: the www prefix is folded into the code
    let url = format!("http://www.{}", "b".repeat(16));
    assert_eq!(encode_url(&url).unwrap().len(), MAX_URL_PAYLOAD_LEN);
}

#[test]
fn test_eddystone_flags() {
    assert_eq!(AdFlags::EDDYSTONE.bits(), 0x1a);
    assert!(!AdFlags::EDDYSTONE.contains(AdFlags::BR_EDR_NOT_SUPPORTED));
}

#[test]
fn test_advertising_data_header() {
    let payload = encode_url("https://example.com").unwrap();
    let data = AdvertisingData::eddystone_url(&payload).unwrap();

    let expected_header = [
        0x02, 0x01, 0x1a, // Flags
        0x03, 0x03, 0xaa, 0xfe, // Complete 16-bit service UUIDs
        0x11, 0x16, 0xaa, 0xfe, // Service data, 5 + 12 bytes
        0x10, 0xed, // URL frame, TX power
    ];

    assert_eq!(&data.as_bytes()[..EDDYSTONE_URL_HEADER_LEN], &expected_header);
    assert_eq!(data.payload(), payload.as_slice());
    assert_eq!(data.len(), 25);
}

#[test]
fn test_advertising_data_lengths() {
    for p in 1..=MAX_URL_PAYLOAD_LEN {
        let payload = vec![3u8; p];
        let data = AdvertisingData::eddystone_url(&payload).unwrap();

        assert_eq!(data.len(), EDDYSTONE_URL_HEADER_LEN + p);
        assert_eq!(data.as_bytes()[7] as usize, SERVICE_DATA_BASE_LEN + p);

        // Service data length counts from its type byte to the end
        assert_eq!(data.as_bytes()[7] as usize, data.len() - 8);
    }
}

#[test]
fn test_advertising_data_rejects_oversize_payload() {
    assert_eq!(
        AdvertisingData::eddystone_url(&[0u8; 18]),
        Err(EncodeError::PayloadTooLong(18))
    );
    assert_eq!(
        AdvertisingData::eddystone_url(&[]),
        Err(EncodeError::PayloadTooLong(0))
    );
}

#[test]
fn test_advertising_data_display() {
    let data = AdvertisingData::eddystone_url(&[0, b'a']).unwrap();
    assert_eq!(data.to_string(), "02011a0303aafe0716aafe10ed0061");
}
