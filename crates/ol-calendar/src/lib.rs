//! # ol-calendar
//!
//! Turns a `(country, year)` pair and a set of holiday dates into a
//! month → week → day grid, optionally padded to whole Monday–Sunday rows,
//! and finds the next working day after a date.
//!
//! ```
//! use ol_calendar::{CalendarRecord, CalendarService, DayType, HolidayRecord, InMemoryStore};
//! use ol_time::Date;
//!
//! let observed = Date::from_ymd(2017, 1, 2).unwrap();
//! let service = CalendarService::from_store(
//!     InMemoryStore::new()
//!         .with_calendar(CalendarRecord::new("IE", 2017))
//!         .with_holiday(HolidayRecord::new(observed, "New Year (observed)")),
//! );
//!
//! let year = service.get_calendar_year("IE", 2017).unwrap().unwrap();
//! assert_eq!(year.months.len(), 12);
//! let day = year.days().find(|d| d.date == observed).unwrap();
//! assert_eq!(day.day_type, DayType::Holiday);
//!
//! let saturday = Date::from_ymd(2016, 12, 31).unwrap();
//! assert_eq!(service.get_next_work_day(saturday).unwrap().to_string(), "2017-01-03");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Day classification (`CalendarDay`, `DayType`).
pub mod day;

/// Calendar and holiday records and the lookup traits.
pub mod lookup;

/// Month construction.
pub mod month;

/// Monday–Sunday padding.
pub mod padding;

/// Query façade.
pub mod service;

/// In-memory lookup store.
pub mod store;

/// Week construction.
pub mod week;

/// Next working day search.
pub mod workday;

/// Year construction.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use day::{classify, CalendarDay, DayType};
pub use lookup::{CalendarLookup, CalendarRecord, HolidayLookup, HolidayRecord, NoHolidays};
pub use month::{build_month, CalendarMonth};
pub use padding::{pad_month, pad_year};
pub use service::CalendarService;
pub use store::{InMemoryStore, SeedData};
pub use week::{build_week, CalendarWeek};
pub use workday::next_workday;
pub use year::{build_year, CalendarYearView, SUPPORTED_YEARS};
