//! Criterion benchmarks for building calendar grids.
//!
//! Benchmarks cover:
//! - Unpadded year construction with and without holidays
//! - Padding a built year
//! - Next workday search across a holiday cluster

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ol_calendar::{
    build_year, next_workday, pad_year, CalendarRecord, HolidayRecord, InMemoryStore, NoHolidays,
};
use ol_time::Date;

fn store() -> InMemoryStore {
    let mut store = InMemoryStore::new().with_calendar(CalendarRecord::new("IE", 2024));
    for (m, d, name) in [
        (1, 1, "New Year's Day"),
        (2, 5, "St. Brigid's Day"),
        (3, 18, "St. Patrick's Day (observed)"),
        (4, 1, "Easter Monday"),
        (5, 6, "May Bank Holiday"),
        (6, 3, "June Bank Holiday"),
        (8, 5, "August Bank Holiday"),
        (10, 28, "October Bank Holiday"),
        (12, 25, "Christmas Day"),
        (12, 26, "St. Stephen's Day"),
    ] {
        if let Ok(date) = Date::from_ymd(2024, m, d) {
            store.insert_holiday(HolidayRecord::new(date, name));
        }
    }
    store
}

fn bench_build_year(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_year");
    let calendar = CalendarRecord::new("IE", 2024);
    let store = store();

    group.bench_function("no_holidays", |b| {
        b.iter(|| build_year(black_box(&calendar), &NoHolidays))
    });
    group.bench_function("ireland", |b| b.iter(|| build_year(black_box(&calendar), &store)));
    group.bench_function("ireland_padded", |b| {
        b.iter(|| build_year(black_box(&calendar), &store).and_then(pad_year))
    });

    group.finish();
}

fn bench_next_workday(c: &mut Criterion) {
    let store = store();
    let christmas_eve_eve = Date::from_ymd(2024, 12, 20).ok();

    c.bench_function("next_workday_christmas", |b| {
        b.iter(|| christmas_eve_eve.map(|d| next_workday(black_box(d), &store)))
    });
}

criterion_group!(benches, bench_build_year, bench_next_workday);
criterion_main!(benches);
