//! Metric Cursor
//!
//! Positionable read access to a store, one record at a time.
//!
//! ## States
//! ```text
//!   AtRecord(offset) ──next()──▶ AtRecord(offset + size) ──next()──▶ ... ──▶ AtEnd
//!         ▲                                                                   │
//!         └──────────────── reset() / seek(previous position()) ◀─────────────┘
//! ```
//! `AtEnd` is any offset at or past the store's current `bytes_used`.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::{Result, StoreError};
use crate::record::{self, record_size, RecordHeader, HEADER_SIZE};

use super::MetricStore;

/// One decoded record
///
/// The name borrows from the store's buffer whenever the stored bytes are
/// valid UTF-8.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord<'a> {
    /// Byte offset of the record within the store
    pub offset: usize,
    pub timestamp: i64,
    pub value: f64,
    pub name: Cow<'a, str>,
}

impl MetricRecord<'_> {
    /// Detach the record from the store's buffer
    pub fn into_owned(self) -> MetricRecord<'static> {
        MetricRecord {
            offset: self.offset,
            timestamp: self.timestamp,
            value: self.value,
            name: Cow::Owned(self.name.into_owned()),
        }
    }
}

/// Cursor over the records of a [`MetricStore`]
///
/// Reads the store's current `bytes_used` on every call rather than a
/// snapshot taken at creation.
pub struct MetricCursor<'a, B> {
    store: &'a MetricStore<B>,
    offset: usize,
}

impl<'a, B: AsRef<[u8]>> MetricCursor<'a, B> {
    pub(super) fn new(store: &'a MetricStore<B>) -> Self {
        Self { store, offset: 0 }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Check if the cursor is positioned on a record
    pub fn has_next(&self) -> bool {
        self.offset < self.store.bytes_used()
            && self.offset + HEADER_SIZE <= self.store.capacity()
    }

    /// Advance past the current record
    ///
    /// Fails with `NoMoreEntries` when `has_next()` is false.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<()> {
        if !self.has_next() {
            return Err(StoreError::NoMoreEntries);
        }

        let name_length = self.header()?.name_len();
        self.offset += record_size(name_length);
        Ok(())
    }

    /// Move back to the first record
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Jump to a byte offset previously returned by [`position`](Self::position)
    /// or by an append
    ///
    /// Only the range `[0, bytes_used)` is checked. Seeking into the middle of
    /// a record is accepted and decodes garbage fields.
    pub fn seek(&mut self, offset: usize) -> Result<()> {
        let bytes_used = self.store.bytes_used();
        if offset >= bytes_used {
            return Err(StoreError::InvalidOffset { offset, bytes_used });
        }
        self.offset = offset;
        Ok(())
    }

    // =========================================================================
    // Field Access
    // =========================================================================

    /// Timestamp of the current record
    pub fn timestamp(&self) -> Result<i64> {
        Ok(self.header()?.timestamp)
    }

    /// Value of the current record
    pub fn value(&self) -> Result<f64> {
        Ok(self.header()?.value)
    }

    /// Name length of the current record, in bytes
    pub fn name_length(&self) -> Result<usize> {
        Ok(self.header()?.name_len())
    }

    /// Raw name bytes of the current record
    pub fn name_bytes(&self) -> Result<&'a [u8]> {
        let header = self.header()?;
        self.name_slice(&header)
    }

    /// Name of the current record
    ///
    /// Bytes that are not valid UTF-8 (only possible after seeking into the
    /// middle of a record) are replaced with U+FFFD.
    pub fn metric_name(&self) -> Result<Cow<'a, str>> {
        Ok(String::from_utf8_lossy(self.name_bytes()?))
    }

    /// Decode the whole current record
    pub fn record(&self) -> Result<MetricRecord<'a>> {
        let header = self.header()?;
        let name = self.name_slice(&header)?;

        Ok(MetricRecord {
            offset: self.offset,
            timestamp: header.timestamp,
            value: header.value,
            name: String::from_utf8_lossy(name),
        })
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn check_bounds(&self) -> Result<()> {
        let bytes_used = self.store.bytes_used();
        if self.offset >= bytes_used {
            return Err(StoreError::CursorExhausted {
                position: self.offset,
                bytes_used,
            });
        }
        Ok(())
    }

    fn header(&self) -> Result<RecordHeader> {
        self.check_bounds()?;

        if self.offset + HEADER_SIZE > self.store.capacity() {
            return Err(StoreError::CorruptRecord(format!(
                "header at offset {} runs past capacity {}",
                self.offset,
                self.store.capacity()
            )));
        }

        Ok(record::decode_header(&self.store.region()[self.offset..]))
    }

    fn name_slice(&self, header: &RecordHeader) -> Result<&'a [u8]> {
        let store: &'a MetricStore<B> = self.store;
        let end = self.offset + HEADER_SIZE + header.name_len();

        if end > store.capacity() {
            return Err(StoreError::CorruptRecord(format!(
                "name of {} bytes at offset {} runs past capacity {}",
                header.name_len(),
                self.offset,
                store.capacity()
            )));
        }

        Ok(record::decode_name(
            &store.region()[self.offset..],
            header.name_len(),
        ))
    }
}
