use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::OffsetFlag;

/// Mask selecting the 5-bit hour field (bits 0-4).
pub const HOURS_MASK: u8 = 0b0001_1111;
/// Largest hour magnitude accepted by the decoder.
pub const MAX_HOURS: u8 = 23;
/// Daylight saving time bit.
pub const TZ_DST: u8 = OffsetFlag::Dst as u8;
/// West-of-UTC bit.
pub const TZ_NEG: u8 = OffsetFlag::Negative as u8;
/// Half-hour bit.
pub const TZ_HALF: u8 = OffsetFlag::Half as u8;

/// Returns the raw 5-bit hour field without range checking (0..=31).
#[inline]
pub fn raw_hours(byte: u8) -> u8 {
    byte & HOURS_MASK
}

/// Decoded form of a packed offset byte.
///
/// A `TzOffset` can only be built with an hour value in `0..=23`, so
/// [`TzOffset::to_byte`] always yields a byte that [`TzOffset::from_byte`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct TzOffset {
    hours: u8,
    dst: bool,
    negative: bool,
    half: bool,
}

impl TzOffset {
    /// UTC itself: zero hours, no flags.
    pub const UTC: TzOffset = TzOffset {
        hours: 0,
        dst: false,
        negative: false,
        half: false,
    };

    /// Creates an offset of `hours` east of UTC with no flags set.
    pub fn new(hours: u8) -> Result<Self> {
        if hours > MAX_HOURS {
            return Err(Error::HourOutOfRange(hours));
        }
        Ok(Self {
            hours,
            ..Self::UTC
        })
    }

    /// Sets or clears the daylight saving flag.
    pub fn with_dst(mut self, dst: bool) -> Self {
        self.dst = dst;
        self
    }

    /// Sets or clears the west-of-UTC flag.
    pub fn with_negative(mut self, negative: bool) -> Self {
        self.negative = negative;
        self
    }

    /// Sets or clears the half-hour flag.
    pub fn with_half(mut self, half: bool) -> Self {
        self.half = half;
        self
    }

    /// Decodes a packed offset byte. Hour fields of 24..=31 are rejected.
    pub fn from_byte(byte: u8) -> Result<Self> {
        let hours = raw_hours(byte);
        if hours > MAX_HOURS {
            return Err(Error::HourOutOfRange(hours));
        }
        Ok(Self {
            hours,
            dst: OffsetFlag::Dst.is_set(byte),
            negative: OffsetFlag::Negative.is_set(byte),
            half: OffsetFlag::Half.is_set(byte),
        })
    }

    /// Packs the offset back into its single-byte form.
    pub fn to_byte(self) -> u8 {
        let mut byte = self.hours & HOURS_MASK;
        if self.dst {
            byte |= TZ_DST;
        }
        if self.negative {
            byte |= TZ_NEG;
        }
        if self.half {
            byte |= TZ_HALF;
        }
        byte
    }

    /// Hour magnitude (0..=23).
    pub fn hours(self) -> u8 {
        self.hours
    }

    /// Whether daylight saving time is flagged as active.
    pub fn is_dst(self) -> bool {
        self.dst
    }

    /// Whether the offset lies west of UTC.
    pub fn is_negative(self) -> bool {
        self.negative
    }

    /// Whether thirty minutes are added to the hour value.
    pub fn is_half(self) -> bool {
        self.half
    }

    /// Iterates over the flags set on this offset.
    pub fn flags(self) -> impl Iterator<Item = OffsetFlag> {
        OffsetFlag::set_in(self.to_byte())
    }

    /// Signed offset from UTC in minutes, east positive.
    ///
    /// The DST flag is carried as metadata only and does not shift the result.
    pub fn utc_offset_minutes(self) -> i32 {
        let magnitude = i32::from(self.hours) * 60 + if self.half { 30 } else { 0 };
        if self.negative { -magnitude } else { magnitude }
    }
}

impl TryFrom<u8> for TzOffset {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte)
    }
}

impl From<TzOffset> for u8 {
    fn from(offset: TzOffset) -> Self {
        offset.to_byte()
    }
}

impl fmt::Display for TzOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { '-' } else { '+' };
        let minutes = if self.half { 30 } else { 0 };
        write!(f, "UTC{sign}{:02}:{minutes:02}", self.hours)
    }
}
