//! # metricstore
//!
//! A fixed-capacity, append-only binary store for timestamped named
//! measurements with:
//! - A densely packed, 8-byte aligned record format over a raw byte buffer
//! - Single-writer appends with exact capacity accounting
//! - Positionable cursors for sequential and random-access reads
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      Application                             │
//! └───────────────┬─────────────────────────────┬───────────────┘
//!                 │ append                      │ seek / next / get
//!                 ▼                             ▼
//!          ┌─────────────┐              ┌──────────────┐
//!          │MetricWriter │              │ MetricCursor │
//!          │  (&mut)     │              │   (&, many)  │
//!          └──────┬──────┘              └──────┬───────┘
//!                 │                            │
//!                 └────────────┬───────────────┘
//!                              ▼
//!                     ┌─────────────────┐
//!                     │   MetricStore   │
//!                     │ bytes_used/count│
//!                     └────────┬────────┘
//!                              ▼
//!                     ┌─────────────────┐
//!                     │  Record Codec   │
//!                     │ (byte buffer)   │
//!                     └─────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use metricstore::{MetricStore, StoreConfig};
//!
//! let config = StoreConfig::builder().capacity(4096).build();
//! let mut store = MetricStore::open(&config)?;
//!
//! let mut writer = store.writer();
//! writer.append(1_700_000_000_000, "cpu.usage", 75.5)?;
//! writer.append(1_700_000_001_000, "memory.free", 1024.0)?;
//!
//! let mut cursor = store.cursor();
//! while cursor.has_next() {
//!     println!("{}: {} = {:.2}", cursor.timestamp()?, cursor.metric_name()?, cursor.value()?);
//!     cursor.next()?;
//! }
//! # Ok::<(), metricstore::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::StoreConfig;
pub use record::{HEADER_SIZE, MAX_NAME_LENGTH};
pub use store::{
    AlignedBuffer, MetricCursor, MetricIter, MetricRecord, MetricStore, MetricSummary,
    MetricWriter, SharedMetricStore, StoreStats,
};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of metricstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
