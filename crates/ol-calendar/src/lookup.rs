//! Read capabilities the calendar engine consumes.
//!
//! Calendar and holiday records live in some external store. The engine
//! never writes to it; it only asks two questions: "is there a calendar for
//! this country and year?" and "is this date a holiday?".
//!
//! Holidays are keyed by date alone. They are not scoped to a country or a
//! calendar, so every country shares one holiday set.

use std::sync::Arc;

use ol_time::Date;
use serde::{Deserialize, Serialize};

/// A configured `(country, year)` calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarRecord {
    /// Country code or name, used verbatim.
    pub country: String,
    /// Calendar year.
    pub year: i32,
}

impl CalendarRecord {
    /// Create a record.
    pub fn new(country: impl Into<String>, year: i32) -> Self {
        Self {
            country: country.into(),
            year,
        }
    }
}

/// A named holiday on a single date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayRecord {
    /// The holiday date.
    pub date: Date,
    /// Display name.
    pub name: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HolidayRecord {
    /// Create a record without a description.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Look up calendar records.
pub trait CalendarLookup: Send + Sync {
    /// The calendar configured for `country` and `year`, if any.
    fn find_calendar(&self, country: &str, year: i32) -> Option<CalendarRecord>;

    /// Every configured calendar, in store order.
    fn all_calendars(&self) -> Vec<CalendarRecord>;
}

/// Look up holidays by date.
pub trait HolidayLookup: Send + Sync {
    /// The holiday falling on `date`, if any.
    fn find_holiday(&self, date: Date) -> Option<HolidayRecord>;
}

impl<T: CalendarLookup + ?Sized> CalendarLookup for &T {
    fn find_calendar(&self, country: &str, year: i32) -> Option<CalendarRecord> {
        (**self).find_calendar(country, year)
    }

    fn all_calendars(&self) -> Vec<CalendarRecord> {
        (**self).all_calendars()
    }
}

impl<T: CalendarLookup + ?Sized> CalendarLookup for Arc<T> {
    fn find_calendar(&self, country: &str, year: i32) -> Option<CalendarRecord> {
        (**self).find_calendar(country, year)
    }

    fn all_calendars(&self) -> Vec<CalendarRecord> {
        (**self).all_calendars()
    }
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for &T {
    fn find_holiday(&self, date: Date) -> Option<HolidayRecord> {
        (**self).find_holiday(date)
    }
}

impl<T: HolidayLookup + ?Sized> HolidayLookup for Arc<T> {
    fn find_holiday(&self, date: Date) -> Option<HolidayRecord> {
        (**self).find_holiday(date)
    }
}

/// A holiday lookup that knows no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayLookup for NoHolidays {
    fn find_holiday(&self, _date: Date) -> Option<HolidayRecord> {
        None
    }
}
