//! Request-level entry points.
//!
//! [`CalendarService`] pairs a [`CalendarLookup`] with a [`HolidayLookup`]
//! and answers the three calendar questions: the unpadded year, the padded
//! year, and the next working day. A missing calendar is `Ok(None)`; `Err`
//! means the arguments were invalid.

use std::sync::Arc;

use ol_core::ensure;
use ol_core::errors::Result;
use ol_core::utilities::distinct::DistinctByKey;
use ol_time::Date;
use tracing::debug;

use crate::lookup::{CalendarLookup, CalendarRecord, HolidayLookup};
use crate::padding::pad_year;
use crate::store::InMemoryStore;
use crate::workday::next_workday;
use crate::year::{build_year, checked_year, CalendarYearView};

/// Calendar queries over a pair of lookups.
#[derive(Debug, Clone)]
pub struct CalendarService<C, H> {
    calendars: C,
    holidays: H,
}

impl CalendarService<Arc<InMemoryStore>, Arc<InMemoryStore>> {
    /// Serve both lookups from one in-memory store.
    pub fn from_store(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(Arc::clone(&store), store)
    }
}

impl<C: CalendarLookup, H: HolidayLookup> CalendarService<C, H> {
    /// Create a service.
    pub fn new(calendars: C, holidays: H) -> Self {
        Self {
            calendars,
            holidays,
        }
    }

    /// The calendar lookup.
    pub fn calendars(&self) -> &C {
        &self.calendars
    }

    /// The holiday lookup.
    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    /// The unpadded grid for `country` and `year`, or `None` when no such
    /// calendar is configured.
    pub fn get_calendar_year(&self, country: &str, year: i32) -> Result<Option<CalendarYearView>> {
        debug!(country, year, "request to get calendar year");
        self.build(country, year)
    }

    /// Like [`get_calendar_year`](Self::get_calendar_year), with every month
    /// padded to whole Monday–Sunday rows.
    pub fn get_padded_calendar_year(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Option<CalendarYearView>> {
        debug!(country, year, "request to get padded calendar year");
        self.build(country, year)?.map(pad_year).transpose()
    }

    /// The first working day after `date`.
    pub fn get_next_work_day(&self, date: Date) -> Result<Date> {
        debug!(%date, "request to get next work day");
        next_workday(date, &self.holidays)
    }

    /// One calendar per country: the first configured for it.
    pub fn find_unique_country_calendars(&self) -> Vec<CalendarRecord> {
        debug!("request to get unique country calendars");
        self.calendars
            .all_calendars()
            .into_iter()
            .distinct_by_key(|c| c.country.clone())
            .collect()
    }

    fn build(&self, country: &str, year: i32) -> Result<Option<CalendarYearView>> {
        ensure!(!country.trim().is_empty(), "country must not be blank");
        checked_year(year)?;
        let Some(calendar) = self.calendars.find_calendar(country, year) else {
            debug!(country, year, "no calendar configured");
            return Ok(None);
        };
        let mut view = build_year(&calendar, &self.holidays)?;
        view.country = country.to_owned();
        Ok(Some(view))
    }
}
