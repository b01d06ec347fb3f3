//! Metric Iterator
//!
//! Sequential iteration over all records of a store.

use std::iter::FusedIterator;

use crate::error::Result;

use super::{MetricCursor, MetricRecord};

/// Iterator over records in append order
///
/// Stops after the first decode error.
pub struct MetricIter<'a, B> {
    cursor: MetricCursor<'a, B>,
    failed: bool,
}

impl<'a, B: AsRef<[u8]>> MetricIter<'a, B> {
    pub(super) fn new(cursor: MetricCursor<'a, B>) -> Self {
        Self {
            cursor,
            failed: false,
        }
    }
}

impl<'a, B: AsRef<[u8]>> Iterator for MetricIter<'a, B> {
    type Item = Result<MetricRecord<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.cursor.has_next() {
            return None;
        }

        let item = self.cursor.record().and_then(|record| {
            self.cursor.next()?;
            Ok(record)
        });

        if item.is_err() {
            self.failed = true;
        }

        Some(item)
    }
}

impl<'a, B: AsRef<[u8]>> FusedIterator for MetricIter<'a, B> {}
