//! In-memory calendar and holiday store.
//!
//! Backs both lookup traits with plain collections. It is filled once (from
//! code or from a [`SeedData`] document) and only read afterwards, so a
//! single store can be shared by many concurrent requests behind an `Arc`.

use std::collections::BTreeMap;

use ol_time::Date;
use serde::{Deserialize, Serialize};

use crate::lookup::{CalendarLookup, CalendarRecord, HolidayLookup, HolidayRecord};

/// Serialisable contents of a store.
///
/// ```toml
/// [[calendars]]
/// country = "IE"
/// year = 2017
///
/// [[holidays]]
/// date = "2017-01-02"
/// name = "New Year (observed)"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    /// Calendar records.
    #[serde(default)]
    pub calendars: Vec<CalendarRecord>,
    /// Holiday records.
    #[serde(default)]
    pub holidays: Vec<HolidayRecord>,
}

/// Calendars in insertion order plus holidays keyed by date.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    calendars: Vec<CalendarRecord>,
    holidays: BTreeMap<Date, HolidayRecord>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data. A later holiday on the same date
    /// replaces an earlier one.
    pub fn from_seed(seed: SeedData) -> Self {
        let mut store = Self::new();
        for calendar in seed.calendars {
            store.insert_calendar(calendar);
        }
        for holiday in seed.holidays {
            store.insert_holiday(holiday);
        }
        store
    }

    /// Add a calendar record.
    pub fn insert_calendar(&mut self, calendar: CalendarRecord) {
        self.calendars.push(calendar);
    }

    /// Add or replace the holiday on `holiday.date`.
    pub fn insert_holiday(&mut self, holiday: HolidayRecord) {
        self.holidays.insert(holiday.date, holiday);
    }

    /// Builder form of [`insert_calendar`](Self::insert_calendar).
    pub fn with_calendar(mut self, calendar: CalendarRecord) -> Self {
        self.insert_calendar(calendar);
        self
    }

    /// Builder form of [`insert_holiday`](Self::insert_holiday).
    pub fn with_holiday(mut self, holiday: HolidayRecord) -> Self {
        self.insert_holiday(holiday);
        self
    }

    /// Holidays in `[from, to]`, ascending.
    pub fn holidays_between(&self, from: Date, to: Date) -> impl Iterator<Item = &HolidayRecord> {
        self.holidays
            .range(from..)
            .take_while(move |(d, _)| **d <= to)
            .map(|(_, h)| h)
    }

    /// Number of calendar records.
    pub fn calendar_count(&self) -> usize {
        self.calendars.len()
    }

    /// Number of holiday records.
    pub fn holiday_count(&self) -> usize {
        self.holidays.len()
    }
}

impl CalendarLookup for InMemoryStore {
    fn find_calendar(&self, country: &str, year: i32) -> Option<CalendarRecord> {
        self.calendars
            .iter()
            .find(|c| c.country == country && c.year == year)
            .cloned()
    }

    fn all_calendars(&self) -> Vec<CalendarRecord> {
        self.calendars.clone()
    }
}

impl HolidayLookup for InMemoryStore {
    fn find_holiday(&self, date: Date) -> Option<HolidayRecord> {
        self.holidays.get(&date).cloned()
    }
}
