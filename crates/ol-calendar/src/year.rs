//! Building a whole calendar year.

use std::ops::RangeInclusive;

use ol_core::errors::Result;
use ol_core::{ensure, ensure_post};
use ol_time::{Date, Month};
use serde::Serialize;
use tracing::trace;

use crate::day::CalendarDay;
use crate::lookup::{CalendarRecord, HolidayLookup};
use crate::month::{build_month, CalendarMonth};

/// Years a grid can be built for.
///
/// One year of margin on each side of the representable [`Date`] range keeps
/// padding and the next-workday search in range.
pub const SUPPORTED_YEARS: RangeInclusive<i32> =
    (Date::MIN_YEAR as i32 + 1)..=(Date::MAX_YEAR as i32 - 1);

/// The month → week → day grid of one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarYearView {
    /// Country the grid was requested for.
    pub country: String,
    /// Calendar year.
    pub year: i32,
    /// January to December.
    pub months: Vec<CalendarMonth>,
}

impl CalendarYearView {
    /// Every day in the grid, month by month and week by week.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.months.iter().flat_map(|m| m.days())
    }

    /// The grid for `month`.
    pub fn month(&self, month: Month) -> Option<&CalendarMonth> {
        self.months.iter().find(|m| m.month == month)
    }
}

/// Validate `year` and narrow it to the date type's year.
pub(crate) fn checked_year(year: i32) -> Result<u16> {
    ensure!(
        SUPPORTED_YEARS.contains(&year),
        "year {year} outside supported range {}..={}",
        SUPPORTED_YEARS.start(),
        SUPPORTED_YEARS.end()
    );
    Ok(year as u16)
}

/// Build the unpadded grid for `calendar`.
///
/// The result always has twelve months, January first, and its days are
/// exactly the dates of the year in chronological order.
pub fn build_year<H: HolidayLookup + ?Sized>(
    calendar: &CalendarRecord,
    holidays: &H,
) -> Result<CalendarYearView> {
    let year = checked_year(calendar.year)?;
    let months = Month::ALL
        .iter()
        .map(|&month| -> Result<CalendarMonth> {
            let built = build_month(year, month, holidays)?;
            trace!(country = %calendar.country, year, %month, weeks = built.weeks.len(), "built month");
            Ok(built)
        })
        .collect::<Result<Vec<_>>>()?;

    let view = CalendarYearView {
        country: calendar.country.clone(),
        year: calendar.year,
        months,
    };

    let first = Date::from_ymd(year, 1, 1)?;
    let last = Date::from_ymd(year, 12, 31)?;
    ensure_post!(view.months.len() == 12, "expected 12 months, got {}", view.months.len());
    let dates: Vec<Date> = view.days().map(|d| d.date).collect();
    ensure_post!(
        dates.first() == Some(&first)
            && dates.last() == Some(&last)
            && dates.windows(2).all(|w| w[1] - w[0] == 1),
        "days of {year} are not a gap-free run from {first} to {last}"
    );
    Ok(view)
}
