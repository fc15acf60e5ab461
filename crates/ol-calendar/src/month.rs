//! Partitioning a month into weeks.

use ol_core::errors::Result;
use ol_time::{Date, Month};
use serde::Serialize;

use crate::day::CalendarDay;
use crate::lookup::HolidayLookup;
use crate::week::{build_week, CalendarWeek};

/// One month of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    /// The month.
    pub month: Month,
    /// Weeks in order. Before padding, together they hold exactly the
    /// month's days.
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarMonth {
    /// All days of the month, week by week.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }
}

/// Build `month` of `year`, one week at a time, until the cursor leaves the
/// month.
pub fn build_month<H: HolidayLookup + ?Sized>(
    year: u16,
    month: Month,
    holidays: &H,
) -> Result<CalendarMonth> {
    let mut weeks = Vec::with_capacity(6);
    let mut cursor = Date::first_of(year, month)?;
    while cursor.month() == month {
        let (week, next) = build_week(cursor, month, holidays)?;
        weeks.push(week);
        cursor = next;
    }
    Ok(CalendarMonth { month, weeks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::NoHolidays;

    #[test]
    fn february_2021_is_four_full_weeks() {
        let feb = build_month(2021, Month::February, &NoHolidays).unwrap();
        let ordinals: Vec<u8> = feb.weeks.iter().map(|w| w.ordinal).collect();
        assert_eq!(ordinals, vec![5, 6, 7, 8]);
        assert!(feb.weeks.iter().all(|w| w.len() == 7));
        assert_eq!(feb.days().count(), 28);
    }

    #[test]
    fn may_2021_spans_six_weeks() {
        // Saturday 1st to Monday 31st
        let may = build_month(2021, Month::May, &NoHolidays).unwrap();
        let sizes: Vec<usize> = may.weeks.iter().map(|w| w.len()).collect();
        assert_eq!(sizes, vec![2, 7, 7, 7, 7, 1]);
        assert_eq!(may.weeks[0].ordinal, 17);
        assert_eq!(may.weeks[5].ordinal, 22);
    }
}
