//! The built-in timezone region table and a read-only view over region slices.

mod data;
mod region;

use tracing::{debug, warn};

use crate::encoding::TzOffset;
use crate::error::{Error, Result};

pub use region::{BoundingBox, COORD_SCALE, TimezoneRegion, fixed_to_degrees};

/// Every built-in region, in declaration order.
pub static TZ_LIST: &[TimezoneRegion] = data::TZ_REGIONS;

/// Number of built-in regions, derived from [`TZ_LIST`].
pub const TZ_LENGTH: usize = data::TZ_REGIONS.len();

/// Returns the built-in regions in declaration order.
pub fn records() -> &'static [TimezoneRegion] {
    TZ_LIST
}

/// Returns the number of built-in regions.
pub fn count() -> usize {
    TZ_LIST.len()
}

/// Read-only view over an ordered slice of regions.
#[derive(Debug, Clone, Copy)]
pub struct TimezoneTable<'a> {
    regions: &'a [TimezoneRegion],
}

impl TimezoneTable<'static> {
    /// Wraps the built-in table.
    pub fn builtin() -> Self {
        Self::new(TZ_LIST)
    }
}

impl Default for TimezoneTable<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> TimezoneTable<'a> {
    /// Wraps an arbitrary region slice.
    pub fn new(regions: &'a [TimezoneRegion]) -> Self {
        Self { regions }
    }

    /// Returns all regions in declaration order.
    pub fn records(&self) -> &'a [TimezoneRegion] {
        self.regions
    }

    /// Returns the number of regions.
    pub fn count(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the table holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Returns the region at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'a TimezoneRegion> {
        self.regions.get(index)
    }

    /// Iterates over the regions in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'a, TimezoneRegion> {
        self.regions.iter()
    }

    /// Returns the first region whose name matches exactly.
    pub fn by_name(&self, name: &str) -> Option<&'a TimezoneRegion> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Checks every record against the table invariants, stopping at the first violation.
    pub fn validate(&self) -> Result<()> {
        for (index, region) in self.regions.iter().enumerate() {
            if let Err(err) = check_record(index, region) {
                warn!(index, name = region.name, %err, "timezone record rejected");
                return Err(err);
            }
        }
        debug!(count = self.regions.len(), "timezone table validated");
        Ok(())
    }
}

impl<'a> IntoIterator for TimezoneTable<'a> {
    type Item = &'a TimezoneRegion;
    type IntoIter = std::slice::Iter<'a, TimezoneRegion>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}

fn check_record(index: usize, region: &TimezoneRegion) -> Result<()> {
    if region.name.is_empty() {
        return Err(Error::invalid_record(index, "empty name"));
    }
    if region.abbreviation.is_empty() {
        return Err(Error::invalid_record(index, "empty abbreviation"));
    }
    if !region.bounds().is_normalized() {
        return Err(Error::invalid_record(index, "inverted bounding box"));
    }
    TzOffset::from_byte(region.offset_byte)
        .map_err(|err| Error::invalid_record(index, err))?;
    Ok(())
}
