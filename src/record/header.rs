//! Record header
//!
//! Fixed-size portion of every record, laid out as plain old data so it can be
//! copied to and from the buffer without per-field offset bookkeeping.

use bytemuck::{Pod, Zeroable};

use super::HEADER_SIZE;

/// The 24-byte header preceding each record's name bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct RecordHeader {
    /// Milliseconds since epoch, caller supplied
    pub timestamp: i64,
    /// Measured value
    pub value: f64,
    /// Length of the name that follows, in bytes
    pub name_length: u32,
    _padding: u32,
}

const _: () = assert!(std::mem::size_of::<RecordHeader>() == HEADER_SIZE);
const _: () = assert!(std::mem::align_of::<RecordHeader>() == super::RECORD_ALIGN);

impl RecordHeader {
    pub fn new(timestamp: i64, value: f64, name_length: u32) -> Self {
        Self {
            timestamp,
            value,
            name_length,
            _padding: 0,
        }
    }

    /// Name length as a buffer index
    #[inline]
    pub fn name_len(&self) -> usize {
        self.name_length as usize
    }
}

// Padding bytes carry no meaning and are excluded from equality
impl PartialEq for RecordHeader {
    fn eq(&self, other: &Self) -> bool {
        self.timestamp == other.timestamp
            && self.value == other.value
            && self.name_length == other.name_length
    }
}
