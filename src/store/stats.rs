//! Store statistics
//!
//! Accounting snapshots and value aggregates.

use serde::Serialize;

/// Point-in-time view of a store's space accounting
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoreStats {
    pub capacity: usize,
    pub bytes_used: usize,
    pub bytes_remaining: usize,
    pub entry_count: usize,
    /// Mean bytes per record, including header and padding (0 when empty)
    pub average_entry_size: f64,
}

impl StoreStats {
    pub(crate) fn new(capacity: usize, bytes_used: usize, entry_count: usize) -> Self {
        let average_entry_size = if entry_count == 0 {
            0.0
        } else {
            bytes_used as f64 / entry_count as f64
        };

        Self {
            capacity,
            bytes_used,
            bytes_remaining: capacity - bytes_used,
            entry_count,
            average_entry_size,
        }
    }
}

/// Running aggregate over metric values
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricSummary {
    pub count: usize,
    pub sum: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MetricSummary {
    /// Fold one value into the aggregate
    pub fn observe(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.min = Some(self.min.map_or(value, |m| m.min(value)));
        self.max = Some(self.max.map_or(value, |m| m.max(value)));
    }

    /// Arithmetic mean, `None` when no values were observed
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}
