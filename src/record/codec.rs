//! Record codec
//!
//! Raw encode/decode of one record at the start of a byte slice.
//!
//! These functions trust their caller: offsets, alignment and capacity are
//! validated by the writer and cursor before any call lands here. Slice
//! indexing is the only bounds check.

use super::{RecordHeader, HEADER_SIZE};

/// Encode a record at the start of `dst`
///
/// `dst` must hold at least `HEADER_SIZE + name.len()` bytes and `name` must
/// be at most `u32::MAX` bytes long. Bytes past the name are left untouched.
pub fn encode(dst: &mut [u8], timestamp: i64, value: f64, name: &[u8]) {
    let header = RecordHeader::new(timestamp, value, name.len() as u32);

    dst[..HEADER_SIZE].copy_from_slice(bytemuck::bytes_of(&header));
    dst[HEADER_SIZE..HEADER_SIZE + name.len()].copy_from_slice(name);
}

/// Decode the header at the start of `src`
///
/// `src` must hold at least `HEADER_SIZE` bytes. The read does not require
/// `src` to be aligned.
#[inline]
pub fn decode_header(src: &[u8]) -> RecordHeader {
    bytemuck::pod_read_unaligned(&src[..HEADER_SIZE])
}

/// Borrow the `name_length` name bytes of the record starting at `src`
#[inline]
pub fn decode_name(src: &[u8], name_length: usize) -> &[u8] {
    &src[HEADER_SIZE..HEADER_SIZE + name_length]
}
