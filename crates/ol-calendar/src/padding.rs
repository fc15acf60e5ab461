//! Padding months out to whole Monday–Sunday rows.
//!
//! The first week of each month is extended backwards to a Monday and the
//! last week forwards to a Sunday. Every inserted day is
//! [`DayType::Padded`](crate::day::DayType::Padded), even when it falls on a
//! weekend or a holiday of the neighbouring month.

use ol_core::errors::Result;
use ol_time::Weekday;

use crate::day::CalendarDay;
use crate::month::CalendarMonth;
use crate::year::CalendarYearView;

/// Pad every month of `view`.
pub fn pad_year(mut view: CalendarYearView) -> Result<CalendarYearView> {
    for month in &mut view.months {
        pad_month(month)?;
    }
    Ok(view)
}

/// Pad one month in place. At most six days are added on each side, and a
/// month that already starts on Monday and ends on Sunday is left alone.
pub fn pad_month(month: &mut CalendarMonth) -> Result<()> {
    if let Some(week) = month.weeks.first_mut() {
        if let Some(first) = week.first() {
            let mut lead = Vec::new();
            let mut probe = first.date;
            while probe.weekday() != Weekday::Monday {
                probe = probe.pred()?;
                lead.push(CalendarDay::padded(probe));
            }
            lead.reverse();
            week.days.splice(0..0, lead);
        }
    }

    if let Some(week) = month.weeks.last_mut() {
        if let Some(last) = week.last() {
            let mut probe = last.date;
            while probe.weekday() != Weekday::Sunday {
                probe = probe.succ()?;
                week.days.push(CalendarDay::padded(probe));
            }
        }
    }
    Ok(())
}
