//! Record codec tests
//!
//! These tests verify:
//! - Size and alignment arithmetic
//! - Header layout (field offsets, host byte order)
//! - Encode/decode through raw byte slices

use metricstore::record::{
    decode_header, decode_name, encode, record_size, round_up8, RecordHeader, HEADER_SIZE,
    MAX_NAME_LENGTH, MIN_CAPACITY, RECORD_ALIGN,
};

// =============================================================================
// Constants
// =============================================================================

#[test]
fn test_layout_constants() {
    assert_eq!(HEADER_SIZE, 24);
    assert_eq!(RECORD_ALIGN, 8);
    assert_eq!(MAX_NAME_LENGTH, 255);
    assert_eq!(MIN_CAPACITY, HEADER_SIZE);
    assert_eq!(std::mem::size_of::<RecordHeader>(), HEADER_SIZE);
}

// =============================================================================
// Size Arithmetic
// =============================================================================

#[test]
fn test_round_up8() {
    assert_eq!(round_up8(0), 0);
    assert_eq!(round_up8(1), 8);
    assert_eq!(round_up8(7), 8);
    assert_eq!(round_up8(8), 8);
    assert_eq!(round_up8(9), 16);
    assert_eq!(round_up8(33), 40);
}

#[test]
fn test_record_size_rounds_to_alignment() {
    assert_eq!(record_size(0), 24);
    assert_eq!(record_size(1), 32);
    assert_eq!(record_size(8), 32);
    assert_eq!(record_size(9), 40);
    assert_eq!(record_size(MAX_NAME_LENGTH), 280);

    for len in 0..=MAX_NAME_LENGTH {
        let size = record_size(len);
        assert_eq!(size % 8, 0, "size for name length {} not aligned", len);
        assert!(size >= HEADER_SIZE + len);
        assert!(size < HEADER_SIZE + len + 8);
    }
}

// =============================================================================
// Encode / Decode
// =============================================================================

#[test]
fn test_encode_field_offsets() {
    let mut buf = [0u8; 32];
    encode(&mut buf, 1_700_000_000_123, 42.25, b"cpu");

    assert_eq!(&buf[0..8], &1_700_000_000_123i64.to_ne_bytes());
    assert_eq!(&buf[8..16], &42.25f64.to_ne_bytes());
    assert_eq!(&buf[16..20], &3u32.to_ne_bytes());
    assert_eq!(&buf[24..27], b"cpu");
    // Tail padding untouched
    assert!(buf[27..].iter().all(|&b| b == 0));
}

#[test]
fn test_decode_header_and_name() {
    let mut buf = [0u8; 40];
    encode(&mut buf, -5, -0.5, b"memory.free");

    let header = decode_header(&buf);
    assert_eq!(header.timestamp, -5);
    assert_eq!(header.value, -0.5);
    assert_eq!(header.name_len(), 11);
    assert_eq!(decode_name(&buf, header.name_len()), b"memory.free");
}

#[test]
fn test_decode_ignores_padding_bytes() {
    let mut buf = [0u8; 24];
    encode(&mut buf, 7, 3.0, b"");
    buf[20..24].copy_from_slice(&[0xAA; 4]);

    let header = decode_header(&buf);
    assert_eq!(header, RecordHeader::new(7, 3.0, 0));
}

#[test]
fn test_decode_unaligned_slice() {
    let mut buf = [0u8; 41];
    encode(&mut buf[1..], 99, 1.5, b"x");

    let header = decode_header(&buf[1..]);
    assert_eq!(header.timestamp, 99);
    assert_eq!(header.value, 1.5);
    assert_eq!(decode_name(&buf[1..], header.name_len()), b"x");
}
