//! Record Module
//!
//! On-buffer layout of a single metric record and the size/alignment
//! arithmetic every other component relies on.
//!
//! ## Record Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header (24 bytes, 8-byte aligned)                            │
//! │ ┌───────────────┬───────────────┬─────────────┬────────────┐ │
//! │ │ Timestamp (8) │   Value (8)   │ NameLen (4) │ Padding(4) │ │
//! │ │     i64       │     f64       │    u32      │  unused    │ │
//! │ └───────────────┴───────────────┴─────────────┴────────────┘ │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Name (NameLen bytes, UTF-8, not NUL-terminated)              │
//! ├──────────────────────────────────────────────────────────────┤
//! │ Tail padding up to the next multiple of 8                    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! All fields use host byte order.

mod codec;
mod header;

pub use codec::{decode_header, decode_name, encode};
pub use header::RecordHeader;

// =============================================================================
// Layout Constants
// =============================================================================

/// Size of the fixed record header in bytes
pub const HEADER_SIZE: usize = 24;

/// Every record starts on a multiple of this many bytes
pub const RECORD_ALIGN: usize = 8;

/// Maximum metric name length in bytes (UTF-8)
pub const MAX_NAME_LENGTH: usize = 255;

/// Smallest capacity a store accepts: one header with an empty name
pub const MIN_CAPACITY: usize = HEADER_SIZE;

// =============================================================================
// Size Arithmetic
// =============================================================================

/// Round `offset` up to the next multiple of [`RECORD_ALIGN`]
#[inline]
pub const fn round_up8(offset: usize) -> usize {
    (offset + (RECORD_ALIGN - 1)) & !(RECORD_ALIGN - 1)
}

/// Total bytes a record with a `name_length`-byte name occupies, including
/// the tail padding that keeps the following header aligned.
#[inline]
pub const fn record_size(name_length: usize) -> usize {
    round_up8(HEADER_SIZE + name_length)
}
