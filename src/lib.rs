#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Packed offset byte encoding and decoding.
pub mod encoding;
/// Shared error and result types.
pub mod error;
/// Static region table and read-only table views.
pub mod table;
/// Enumerations used across the crate.
pub mod types;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use encoding::{HOURS_MASK, MAX_HOURS, TZ_DST, TZ_HALF, TZ_NEG, TzOffset, raw_hours};
pub use error::{Error, Result};
#[cfg(feature = "serde")]
pub use serde_support::{OffsetSnapshot, RegionSnapshot, snapshot_table};
pub use table::{
    BoundingBox, COORD_SCALE, TZ_LENGTH, TZ_LIST, TimezoneRegion, TimezoneTable, count,
    fixed_to_degrees, records,
};
pub use types::*;
