//! Error types for metricstore
//!
//! Provides a unified error type for all store, writer and cursor operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for metricstore operations
///
/// Every operation that returns one of these leaves the store byte-for-byte
/// unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // Construction Errors
    // -------------------------------------------------------------------------
    #[error("Capacity error: {0}")]
    Capacity(String),

    // -------------------------------------------------------------------------
    // Writer Errors
    // -------------------------------------------------------------------------
    #[error("Invalid metric name: {0}")]
    InvalidName(String),

    #[error("Insufficient space: need {needed} bytes, but only {available} available")]
    CapacityExceeded { needed: usize, available: usize },

    // -------------------------------------------------------------------------
    // Cursor Errors
    // -------------------------------------------------------------------------
    #[error("Invalid offset: {offset} (valid range: 0-{bytes_used})")]
    InvalidOffset { offset: usize, bytes_used: usize },

    #[error("No more entries")]
    NoMoreEntries,

    #[error("Cursor is past the last entry (position: {position}, bytes used: {bytes_used})")]
    CursorExhausted { position: usize, bytes_used: usize },

    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}
