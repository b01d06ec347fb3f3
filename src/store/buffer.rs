//! Aligned buffer
//!
//! Zeroed heap region whose first byte sits on an 8-byte boundary, so every
//! record header inside it is naturally aligned for its 64-bit fields.

use std::fmt;

use crate::record::RECORD_ALIGN;

/// Owned, zero-initialized, 8-byte aligned byte buffer
///
/// Backed by `u64` words; the byte view is truncated to the requested length.
#[derive(Clone, PartialEq, Eq)]
pub struct AlignedBuffer {
    words: Box<[u64]>,
    len: usize,
}

impl AlignedBuffer {
    /// Allocate `len` zeroed bytes
    pub fn zeroed(len: usize) -> Self {
        let words = vec![0u64; len.div_ceil(RECORD_ALIGN)].into_boxed_slice();
        Self { words, len }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<[u8]> for AlignedBuffer {
    fn as_ref(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.words)[..self.len]
    }
}

impl AsMut<[u8]> for AlignedBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.words)[..self.len]
    }
}

impl fmt::Debug for AlignedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignedBuffer").field("len", &self.len).finish()
    }
}
