#![cfg(feature = "serde")]

use anyhow::Result;
use serde_json::json;
use worldclock_tz::{
    BoundingBox, Error, OffsetFlag, TimezoneRegion, TimezoneTable, TzOffset, snapshot_table,
};

#[test]
fn snapshot_decodes_every_builtin_offset() -> Result<()> {
    let snapshot = snapshot_table(&TimezoneTable::builtin())?;
    assert_eq!(snapshot.len(), TimezoneTable::builtin().count());

    let adelaide = &snapshot[2];
    assert_eq!(adelaide.name, "Adelaide");
    assert_eq!(adelaide.offset.hours, 9);
    assert_eq!(adelaide.offset.flags, [OffsetFlag::Dst, OffsetFlag::Half]);
    assert_eq!(adelaide.offset.utc_offset_minutes, 570);

    let value = serde_json::to_value(&snapshot[0])?;
    assert_eq!(
        value,
        json!({
            "name": "Brisbane",
            "abbreviation": "AEST",
            "bounds": {
                "lat_min": -28_120_489,
                "lat_max": -25_900_761,
                "lon_min": 137_913_970,
                "lon_max": 153_451_528,
            },
            "offset_byte": 10,
            "offset": {
                "hours": 10,
                "utc_offset_minutes": 600,
                "display": "UTC+10:00",
            },
        })
    );
    Ok(())
}

#[test]
fn snapshot_fails_on_out_of_range_hours() {
    let regions = [TimezoneRegion {
        name: "Broken",
        abbreviation: "BRK",
        lat_min: 0,
        lat_max: 1,
        lon_min: 0,
        lon_max: 1,
        offset_byte: 30,
    }];
    let err = snapshot_table(&TimezoneTable::new(&regions)).unwrap_err();
    assert_eq!(err, Error::HourOutOfRange(30));
}

#[test]
fn offset_serializes_as_packed_byte() -> Result<()> {
    let offset = TzOffset::new(9)?.with_dst(true).with_half(true);
    assert_eq!(serde_json::to_string(&offset)?, "169");
    assert_eq!(serde_json::from_str::<TzOffset>("169")?, offset);
    assert!(serde_json::from_str::<TzOffset>("31").is_err());
    Ok(())
}

#[test]
fn region_and_bounds_serialize_raw_fields() -> Result<()> {
    let sydney = TimezoneTable::builtin()
        .by_name("Sydney")
        .expect("Sydney present");
    let value = serde_json::to_value(sydney)?;
    assert_eq!(value["abbreviation"], "AEDT");
    assert_eq!(value["offset_byte"], 42);

    // Unknown fields are ignored, so a region record reads back as its bounding box.
    let bounds: BoundingBox = serde_json::from_value(value)?;
    assert_eq!(bounds, sydney.bounds());
    Ok(())
}
