//! Shared Metric Store
//!
//! Thread-safe handle for hosts that append on one thread and read on others.
//!
//! ## Concurrency
//! - Appends hold the write lock for the whole encode-and-publish step
//! - Reads hold the read lock for the lifetime of the cursor they use
//!
//! A reader therefore sees either all of an append (bytes and counters) or
//! none of it.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;

use super::{AlignedBuffer, MetricRecord, MetricStore, MetricWriter, StoreStats};

/// Cloneable, lock-protected handle to a [`MetricStore`]
pub struct SharedMetricStore<B = AlignedBuffer> {
    inner: Arc<RwLock<MetricStore<B>>>,
}

impl<B> Clone for SharedMetricStore<B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> SharedMetricStore<B> {
    pub fn new(store: MetricStore<B>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Append a single metric under the write lock
    pub fn append(&self, timestamp: i64, name: &str, value: f64) -> Result<usize> {
        let mut store = self.inner.write();
        store.writer().append(timestamp, name, value)
    }

    /// Run `f` with a writer, holding the write lock for the whole batch
    pub fn write<R>(&self, f: impl FnOnce(&mut MetricWriter<'_, B>) -> R) -> R {
        let mut store = self.inner.write();
        let mut writer = store.writer();
        f(&mut writer)
    }
}

impl<B: AsRef<[u8]>> SharedMetricStore<B> {
    /// Run `f` against the store, holding the read lock until it returns
    ///
    /// Every cursor created inside `f` sees the same, stable contents.
    pub fn read<R>(&self, f: impl FnOnce(&MetricStore<B>) -> R) -> R {
        let store = self.inner.read();
        f(&store)
    }

    /// Decode every record under a single read lock
    pub fn collect_records(&self) -> Result<Vec<MetricRecord<'static>>> {
        self.read(|store| {
            store
                .iter()
                .map(|record| record.map(MetricRecord::into_owned))
                .collect()
        })
    }

    pub fn stats(&self) -> StoreStats {
        self.inner.read().stats()
    }

    pub fn entry_count(&self) -> usize {
        self.inner.read().entry_count()
    }

    pub fn bytes_used(&self) -> usize {
        self.inner.read().bytes_used()
    }

    /// Unwrap the store if this is the last handle, otherwise give the
    /// handle back
    pub fn into_inner(self) -> std::result::Result<MetricStore<B>, Self> {
        Arc::try_unwrap(self.inner)
            .map(RwLock::into_inner)
            .map_err(|inner| Self { inner })
    }
}
