//! Next working day search.

use ol_core::errors::Result;
use ol_time::Date;

use crate::day::is_day_off;
use crate::lookup::HolidayLookup;

/// The first date strictly after `date` that is neither a weekend day nor a
/// holiday.
///
/// Fails only if the search runs past the last representable date.
pub fn next_workday<H: HolidayLookup + ?Sized>(date: Date, holidays: &H) -> Result<Date> {
    let mut next = date.succ()?;
    while is_day_off(next, holidays) {
        next = next.succ()?;
    }
    Ok(next)
}
