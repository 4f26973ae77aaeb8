use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use worldclock_tz::{TimezoneTable, TzOffset};

fn bench_decode_all_bytes(c: &mut Criterion) {
    c.bench_function("decode_all_bytes", |b| {
        b.iter(|| {
            let mut accepted = 0u32;
            for byte in 0..=u8::MAX {
                if let Ok(offset) = TzOffset::from_byte(black_box(byte)) {
                    accepted += u32::from(offset.to_byte() == byte);
                }
            }
            accepted
        })
    });
}

fn bench_table(c: &mut Criterion) {
    let table = TimezoneTable::builtin();
    let mut group = c.benchmark_group("table");

    group.bench_function("offset_minutes", |b| {
        b.iter(|| {
            table
                .iter()
                .filter_map(|region| region.offset().ok())
                .map(TzOffset::utc_offset_minutes)
                .sum::<i32>()
        })
    });

    group.bench_function("validate", |b| {
        b.iter(|| black_box(table).validate().is_ok())
    });

    group.bench_function("by_name", |b| {
        b.iter(|| table.by_name(black_box("Adelaide")).is_some())
    });

    group.finish();
}

criterion_group!(benches, bench_decode_all_bytes, bench_table);
criterion_main!(benches);
