#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::encoding::TzOffset;
use crate::error::Result;

/// Fixed-point scale of the coordinate fields: one degree equals `10^6` units.
pub const COORD_SCALE: i32 = 1_000_000;

/// Converts a fixed-point coordinate into floating-point degrees.
#[inline]
pub fn fixed_to_degrees(value: i32) -> f64 {
    f64::from(value) / f64::from(COORD_SCALE)
}

/// One named timezone region of the static table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TimezoneRegion {
    /// Locality name, e.g. `"Brisbane"`.
    pub name: &'static str,
    /// Timezone abbreviation, e.g. `"AEST"`.
    pub abbreviation: &'static str,
    /// Southern latitude bound in degrees × 10^6.
    pub lat_min: i32,
    /// Northern latitude bound in degrees × 10^6.
    pub lat_max: i32,
    /// Western longitude bound in degrees × 10^6.
    pub lon_min: i32,
    /// Eastern longitude bound in degrees × 10^6.
    pub lon_max: i32,
    /// Packed offset: hour field in bits 0-4, then DST, negative and half-hour flags.
    pub offset_byte: u8,
}

impl TimezoneRegion {
    /// Decodes the packed offset byte.
    pub fn offset(&self) -> Result<TzOffset> {
        TzOffset::from_byte(self.offset_byte)
    }

    /// Returns the region's bounding box.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            lat_min: self.lat_min,
            lat_max: self.lat_max,
            lon_min: self.lon_min,
            lon_max: self.lon_max,
        }
    }
}

/// Latitude/longitude rectangle in fixed-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingBox {
    /// Southern latitude bound.
    pub lat_min: i32,
    /// Northern latitude bound.
    pub lat_max: i32,
    /// Western longitude bound.
    pub lon_min: i32,
    /// Eastern longitude bound.
    pub lon_max: i32,
}

impl BoundingBox {
    /// Returns `true` when both minimums are no greater than their maximums.
    pub fn is_normalized(&self) -> bool {
        self.lat_min <= self.lat_max && self.lon_min <= self.lon_max
    }

    /// Returns a copy with any inverted axis swapped into `min <= max` order.
    pub fn normalized(&self) -> Self {
        Self {
            lat_min: self.lat_min.min(self.lat_max),
            lat_max: self.lat_min.max(self.lat_max),
            lon_min: self.lon_min.min(self.lon_max),
            lon_max: self.lon_min.max(self.lon_max),
        }
    }

    /// South-west corner as `(latitude, longitude)` degrees.
    pub fn min_degrees(&self) -> (f64, f64) {
        (fixed_to_degrees(self.lat_min), fixed_to_degrees(self.lon_min))
    }

    /// North-east corner as `(latitude, longitude)` degrees.
    pub fn max_degrees(&self) -> (f64, f64) {
        (fixed_to_degrees(self.lat_max), fixed_to_degrees(self.lon_max))
    }
}
