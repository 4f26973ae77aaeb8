//! Packed offset byte codec.

mod offset;

pub use offset::{HOURS_MASK, MAX_HOURS, TZ_DST, TZ_HALF, TZ_NEG, TzOffset, raw_hours};
