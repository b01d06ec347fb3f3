//! Store Module
//!
//! Fixed-capacity, append-only metric storage over a caller-supplied buffer.
//!
//! ## Responsibilities
//! - Own (or exclusively borrow) the byte buffer for the store's lifetime
//! - Track the used region and the number of records written
//! - Hand out a writer for appends and cursors for reads
//!
//! ## Buffer Layout
//! ```text
//! 0                                   bytes_used               capacity
//! ├──────────┬──────────┬─────┬──────────┼────────────────────────┤
//! │ Record 1 │ Record 2 │ ... │ Record N │   zeroed, unused       │
//! └──────────┴──────────┴─────┴──────────┴────────────────────────┘
//!   every record starts on a multiple of 8
//! ```
//!
//! ## Borrowing Model
//! `writer()` borrows the store mutably and `cursor()` borrows it shared, so
//! a cursor can never observe an append in progress. Use
//! [`SharedMetricStore`] when writer and readers live on different threads.

mod buffer;
mod cursor;
mod iterator;
mod metric_store;
mod shared;
mod stats;
mod writer;

pub use buffer::AlignedBuffer;
pub use cursor::{MetricCursor, MetricRecord};
pub use iterator::MetricIter;
pub use metric_store::MetricStore;
pub use shared::SharedMetricStore;
pub use stats::{MetricSummary, StoreStats};
pub use writer::MetricWriter;
