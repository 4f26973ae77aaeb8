use num_enum::{IntoPrimitive, TryFromPrimitive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Modifier bits packed above the hour field of an offset byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum OffsetFlag {
    /// Daylight saving time is active for the zone.
    Dst = 0b0010_0000,
    /// The offset lies west of UTC and is subtracted.
    Negative = 0b0100_0000,
    /// Thirty minutes are added to the hour offset.
    Half = 0b1000_0000,
}

impl OffsetFlag {
    /// Every flag, ordered from the lowest bit to the highest.
    pub const ALL: [OffsetFlag; 3] = [OffsetFlag::Dst, OffsetFlag::Negative, OffsetFlag::Half];

    /// Returns the single-bit mask for this flag.
    pub fn mask(self) -> u8 {
        self.into()
    }

    /// Returns `true` if this flag's bit is set in `byte`.
    pub fn is_set(self, byte: u8) -> bool {
        byte & self.mask() != 0
    }

    /// Iterates over the flags whose bits are set in `byte`.
    pub fn set_in(byte: u8) -> impl Iterator<Item = OffsetFlag> {
        Self::ALL.into_iter().filter(move |flag| flag.is_set(byte))
    }
}
