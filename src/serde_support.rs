//! Helpers for exporting the region table through `serde`.

use serde::Serialize;

use crate::encoding::TzOffset;
use crate::error::Result;
use crate::table::{BoundingBox, TimezoneRegion, TimezoneTable};
use crate::types::OffsetFlag;

/// Serializable view of a region with its offset byte decoded.
#[derive(Debug, Clone, Serialize)]
pub struct RegionSnapshot {
    /// Locality name.
    pub name: String,
    /// Timezone abbreviation.
    pub abbreviation: String,
    /// Bounding box in fixed-point degrees.
    pub bounds: BoundingBox,
    /// Raw packed offset byte.
    pub offset_byte: u8,
    /// Decoded offset fields.
    pub offset: OffsetSnapshot,
}

/// Field-by-field view of a decoded [`TzOffset`].
#[derive(Debug, Clone, Serialize)]
pub struct OffsetSnapshot {
    /// Hour magnitude.
    pub hours: u8,
    /// Flags set on the byte, lowest bit first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub flags: Vec<OffsetFlag>,
    /// Signed standard offset in minutes, east positive.
    pub utc_offset_minutes: i32,
    /// `UTC+HH:MM` rendering.
    pub display: String,
}

impl OffsetSnapshot {
    fn from_offset(offset: TzOffset) -> Self {
        Self {
            hours: offset.hours(),
            flags: offset.flags().collect(),
            utc_offset_minutes: offset.utc_offset_minutes(),
            display: offset.to_string(),
        }
    }
}

impl RegionSnapshot {
    fn from_region(region: &TimezoneRegion) -> Result<Self> {
        Ok(Self {
            name: region.name.to_string(),
            abbreviation: region.abbreviation.to_string(),
            bounds: region.bounds(),
            offset_byte: region.offset_byte,
            offset: OffsetSnapshot::from_offset(region.offset()?),
        })
    }
}

/// Builds a serializable snapshot of every region, failing on the first undecodable offset.
pub fn snapshot_table(table: &TimezoneTable<'_>) -> Result<Vec<RegionSnapshot>> {
    table.iter().map(RegionSnapshot::from_region).collect()
}
