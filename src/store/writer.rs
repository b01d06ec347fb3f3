//! Metric Writer
//!
//! Sequential, append-only access to a store.

use tracing::{debug, trace};

use crate::error::{Result, StoreError};
use crate::record::{self, record_size, round_up8, MAX_NAME_LENGTH};

use super::MetricStore;

/// Appends records to a [`MetricStore`]
///
/// Holds the store's only mutable borrow while alive. All durable state
/// (`bytes_used`, `entry_count`) lives on the store, so a cursor created after
/// the writer is dropped sees every append.
pub struct MetricWriter<'a, B> {
    store: &'a mut MetricStore<B>,
}

impl<'a, B: AsRef<[u8]> + AsMut<[u8]>> MetricWriter<'a, B> {
    pub(super) fn new(store: &'a mut MetricStore<B>) -> Self {
        Self { store }
    }

    /// Append a metric
    ///
    /// Returns the byte offset of the new record, which can later be passed
    /// to [`MetricCursor::seek`](super::MetricCursor::seek).
    ///
    /// Fails with:
    /// - `InvalidName` if the name is longer than 255 bytes
    /// - `CapacityExceeded` if the record does not fit in the remaining space
    ///
    /// A failed append leaves the store untouched.
    pub fn append(&mut self, timestamp: i64, name: &str, value: f64) -> Result<usize> {
        self.append_bytes(timestamp, name.as_bytes(), value)
    }

    /// Append a metric whose name may be missing
    ///
    /// `None` is rejected with `InvalidName`.
    pub fn append_optional(
        &mut self,
        timestamp: i64,
        name: Option<&str>,
        value: f64,
    ) -> Result<usize> {
        match name {
            Some(name) => self.append(timestamp, name, value),
            None => Err(StoreError::InvalidName(
                "metric name cannot be missing".to_string(),
            )),
        }
    }

    /// Append a metric whose name arrives as raw bytes
    ///
    /// The bytes must be valid UTF-8.
    pub fn append_utf8(&mut self, timestamp: i64, name: &[u8], value: f64) -> Result<usize> {
        if let Err(e) = std::str::from_utf8(name) {
            return Err(StoreError::InvalidName(format!(
                "metric name is not valid UTF-8: {}",
                e
            )));
        }
        self.append_bytes(timestamp, name, value)
    }

    /// Number of records in the store
    pub fn count(&self) -> usize {
        self.store.entry_count()
    }

    fn append_bytes(&mut self, timestamp: i64, name: &[u8], value: f64) -> Result<usize> {
        // Name is validated before any space accounting
        if name.len() > MAX_NAME_LENGTH {
            return Err(StoreError::InvalidName(format!(
                "metric name too long: {} bytes (max {})",
                name.len(),
                MAX_NAME_LENGTH
            )));
        }

        let offset = round_up8(self.store.bytes_used());
        let size = record_size(name.len());

        if offset + size > self.store.capacity() {
            debug!(
                needed = size,
                available = self.store.bytes_remaining(),
                "Append rejected: store full"
            );
            return Err(StoreError::CapacityExceeded {
                needed: size,
                available: self.store.bytes_remaining(),
            });
        }

        record::encode(
            &mut self.store.region_mut()[offset..offset + size],
            timestamp,
            value,
            name,
        );

        // Counters move only after the bytes are in place
        self.store.commit(offset + size);

        trace!(offset, size, timestamp, value, "Appended metric");

        Ok(offset)
    }
}
