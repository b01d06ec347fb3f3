//! Metric Store
//!
//! Owns the buffer and the accounting counters; writers and cursors operate
//! through it.

use bytes::Bytes;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::record::MIN_CAPACITY;

use super::{
    AlignedBuffer, MetricCursor, MetricIter, MetricSummary, MetricWriter, StoreStats,
};

/// Append-only store of timestamped, named measurements
///
/// ## Invariants
/// - `bytes_used <= capacity`
/// - `bytes_used` is a multiple of 8 and equals the summed size of all
///   records written so far
/// - `entry_count` equals the number of successful appends
///
/// `B` is any byte buffer: an owned `Vec<u8>`, `Box<[u8]>`, `BytesMut` or
/// [`AlignedBuffer`], or a borrowed `&mut [u8]` whose lifetime then bounds the
/// store's.
pub struct MetricStore<B = AlignedBuffer> {
    /// Backing bytes; only `[..capacity]` is ever touched
    buffer: B,
    /// Usable size of the buffer in bytes
    capacity: usize,
    /// High-water mark of the written region
    bytes_used: usize,
    /// Number of records written
    entry_count: usize,
}

impl MetricStore<AlignedBuffer> {
    /// Allocate an aligned buffer of the configured capacity and create a
    /// store over it
    pub fn open(config: &StoreConfig) -> Result<Self> {
        // Freshly allocated memory is already zeroed
        Self::init(AlignedBuffer::zeroed(config.capacity), config.capacity, false)
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> MetricStore<B> {
    /// Create a store over the first `capacity` bytes of `buffer`
    ///
    /// The region is zero-filled. Fails with `Capacity` if `capacity` cannot
    /// hold a single record header or exceeds the buffer.
    pub fn create(buffer: B, capacity: usize) -> Result<Self> {
        Self::init(buffer, capacity, true)
    }

    /// Create a store spanning the whole buffer
    pub fn new(buffer: B) -> Result<Self> {
        let capacity = buffer.as_ref().len();
        Self::create(buffer, capacity)
    }

    /// Create a store using capacity and zero-fill policy from `config`
    pub fn create_with_config(buffer: B, config: &StoreConfig) -> Result<Self> {
        Self::init(buffer, config.capacity, config.zero_fill)
    }

    fn init(mut buffer: B, capacity: usize, zero_fill: bool) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(StoreError::Capacity(format!(
                "capacity must be at least {} bytes, got {}",
                MIN_CAPACITY, capacity
            )));
        }

        let buffer_len = buffer.as_ref().len();
        if buffer_len < capacity {
            return Err(StoreError::Capacity(format!(
                "buffer holds {} bytes but capacity of {} was requested",
                buffer_len, capacity
            )));
        }

        if zero_fill {
            buffer.as_mut()[..capacity].fill(0);
        }

        debug!(capacity, zero_fill, "Metric store created");

        Ok(Self {
            buffer,
            capacity,
            bytes_used: 0,
            entry_count: 0,
        })
    }

    /// Get a writer that appends to this store
    pub fn writer(&mut self) -> MetricWriter<'_, B> {
        MetricWriter::new(self)
    }

    // =========================================================================
    // Crate-internal mutators (used by MetricWriter)
    // =========================================================================

    pub(crate) fn region_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[..self.capacity]
    }

    /// Publish one fully written record ending at `bytes_used`
    pub(crate) fn commit(&mut self, bytes_used: usize) {
        debug_assert!(bytes_used <= self.capacity);
        debug_assert!(bytes_used >= self.bytes_used);
        self.bytes_used = bytes_used;
        self.entry_count += 1;
    }
}

impl<B: AsRef<[u8]>> MetricStore<B> {
    // =========================================================================
    // Accounting
    // =========================================================================

    /// Total capacity in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes occupied by written records
    pub fn bytes_used(&self) -> usize {
        self.bytes_used
    }

    /// Bytes still available for new records
    pub fn bytes_remaining(&self) -> usize {
        self.capacity - self.bytes_used
    }

    /// Number of records stored
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    // =========================================================================
    // Readers
    // =========================================================================

    /// Get a cursor positioned at the first record
    pub fn cursor(&self) -> MetricCursor<'_, B> {
        MetricCursor::new(self)
    }

    /// Alias for [`cursor`](Self::cursor)
    pub fn reader(&self) -> MetricCursor<'_, B> {
        self.cursor()
    }

    /// Iterate over all records in append order
    pub fn iter(&self) -> MetricIter<'_, B> {
        MetricIter::new(self.cursor())
    }

    /// Snapshot of the store's accounting
    pub fn stats(&self) -> StoreStats {
        StoreStats::new(self.capacity, self.bytes_used, self.entry_count)
    }

    /// Count, sum, min and max over every stored value
    pub fn summary(&self) -> Result<MetricSummary> {
        let mut summary = MetricSummary::default();
        let mut cursor = self.cursor();

        while cursor.has_next() {
            summary.observe(cursor.value()?);
            cursor.next()?;
        }

        Ok(summary)
    }

    // =========================================================================
    // Raw access (for dumpers and debugging)
    // =========================================================================

    /// The written region, exactly as laid out in memory
    pub fn as_bytes(&self) -> &[u8] {
        &self.region()[..self.bytes_used]
    }

    /// Owned copy of the written region
    pub fn snapshot(&self) -> Bytes {
        Bytes::copy_from_slice(self.as_bytes())
    }

    /// Release the backing buffer
    pub fn into_inner(self) -> B {
        self.buffer
    }

    pub(crate) fn region(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.capacity]
    }
}
