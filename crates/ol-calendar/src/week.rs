//! Grouping consecutive days into one ISO week.

use ol_core::errors::Result;
use ol_time::{Date, Month};
use serde::Serialize;

use crate::day::{classify, CalendarDay};
use crate::lookup::HolidayLookup;

/// A run of days sharing one ISO week and one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarWeek {
    /// ISO-8601 week number of the first day.
    pub ordinal: u8,
    /// Days in ascending date order.
    pub days: Vec<CalendarDay>,
}

impl CalendarWeek {
    /// The first day of the week.
    pub fn first(&self) -> Option<&CalendarDay> {
        self.days.first()
    }

    /// The last day of the week.
    pub fn last(&self) -> Option<&CalendarDay> {
        self.days.last()
    }

    /// Number of days in the week.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the week holds no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Build the week starting at `start`, which must lie in `month`.
///
/// Days are collected until the next date either starts a new ISO week or
/// leaves `month`, so a week never straddles two months even where the ISO
/// week does. Returns the week and the first date not consumed.
pub fn build_week<H: HolidayLookup + ?Sized>(
    start: Date,
    month: Month,
    holidays: &H,
) -> Result<(CalendarWeek, Date)> {
    let ordinal = start.iso_week();
    let mut days = Vec::with_capacity(7);
    let mut cursor = start;
    loop {
        days.push(classify(cursor, holidays));
        cursor = cursor.succ()?;
        if cursor.iso_week() != ordinal || cursor.month() != month {
            break;
        }
    }
    Ok((CalendarWeek { ordinal, days }, cursor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::NoHolidays;
    use ol_time::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn full_week_stops_at_monday() {
        let (week, next) = build_week(date(2021, 3, 1), Month::March, &NoHolidays).unwrap();
        assert_eq!(week.ordinal, 9);
        assert_eq!(week.len(), 7);
        assert_eq!(week.first().unwrap().day_of_week, Weekday::Monday);
        assert_eq!(week.last().unwrap().day_of_week, Weekday::Sunday);
        assert_eq!(next, date(2021, 3, 8));
    }

    #[test]
    fn week_snaps_to_month_end() {
        // March 2021 ends on a Wednesday
        let (week, next) = build_week(date(2021, 3, 29), Month::March, &NoHolidays).unwrap();
        assert_eq!(week.ordinal, 13);
        assert_eq!(week.len(), 3);
        assert_eq!(next, date(2021, 4, 1));
    }

    #[test]
    fn partial_first_week_of_year() {
        // 2021-01-01 is a Friday in ISO week 53 of 2020
        let (week, next) = build_week(date(2021, 1, 1), Month::January, &NoHolidays).unwrap();
        assert_eq!(week.ordinal, 53);
        assert_eq!(week.len(), 3);
        assert_eq!(next, date(2021, 1, 4));
    }
}
