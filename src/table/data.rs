use super::region::TimezoneRegion;
use crate::encoding::{TZ_DST, TZ_HALF};

// Bounds are placeholders shared by every entry; latitude is stored south-to-north.
pub(super) const TZ_REGIONS: &[TimezoneRegion] = &[
    TimezoneRegion {
        name: "Brisbane",
        abbreviation: "AEST",
        lat_min: -28_120_489,
        lat_max: -25_900_761,
        lon_min: 137_913_970,
        lon_max: 153_451_528,
        offset_byte: 10,
    },
    TimezoneRegion {
        name: "Sydney",
        abbreviation: "AEDT",
        lat_min: -28_120_489,
        lat_max: -25_900_761,
        lon_min: 137_913_970,
        lon_max: 153_451_528,
        offset_byte: 10 | TZ_DST,
    },
    TimezoneRegion {
        name: "Adelaide",
        abbreviation: "ACDT",
        lat_min: -28_120_489,
        lat_max: -25_900_761,
        lon_min: 137_913_970,
        lon_max: 153_451_528,
        offset_byte: 9 | TZ_DST | TZ_HALF,
    },
];
