//! Single-day classification.

use ol_time::{Date, Weekday};
use serde::Serialize;

use crate::lookup::HolidayLookup;

/// How a day is shown in the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayType {
    /// Monday–Friday with no holiday.
    Weekday,
    /// Saturday or Sunday, whether or not a holiday falls on it.
    Weekend,
    /// Monday–Friday holiday.
    Holiday,
    /// Out-of-month filler added to complete a Monday–Sunday row.
    Padded,
}

/// One cell of the calendar grid.
///
/// `holiday_name` and `description` are only set when `day_type` is
/// [`DayType::Holiday`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// The date.
    pub date: Date,
    /// Its weekday.
    pub day_of_week: Weekday,
    /// Its classification.
    pub day_type: DayType,
    /// Holiday name, for holidays only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday_name: Option<String>,
    /// Holiday description, for holidays only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CalendarDay {
    /// A filler day. Padding never carries weekend or holiday information.
    pub fn padded(date: Date) -> Self {
        Self {
            date,
            day_of_week: date.weekday(),
            day_type: DayType::Padded,
            holiday_name: None,
            description: None,
        }
    }

    /// Whether this day is a working day (a plain weekday).
    pub fn is_working_day(&self) -> bool {
        self.day_type == DayType::Weekday
    }
}

/// Classify `date`.
///
/// Weekend status wins over holiday status: a holiday on a Saturday or
/// Sunday is a `Weekend` day and keeps no holiday name.
pub fn classify<H: HolidayLookup + ?Sized>(date: Date, holidays: &H) -> CalendarDay {
    let day_of_week = date.weekday();
    let mut day = CalendarDay {
        date,
        day_of_week,
        day_type: DayType::Weekday,
        holiday_name: None,
        description: None,
    };
    if day_of_week.is_weekend() {
        day.day_type = DayType::Weekend;
    } else if let Some(holiday) = holidays.find_holiday(date) {
        day.day_type = DayType::Holiday;
        day.holiday_name = Some(holiday.name);
        day.description = holiday.description;
    }
    day
}

/// `true` for weekends and holidays.
pub fn is_day_off<H: HolidayLookup + ?Sized>(date: Date, holidays: &H) -> bool {
    date.weekday().is_weekend() || holidays.find_holiday(date).is_some()
}
