//! # onleave
//!
//! Calendar year grids for leave planning: every day of a country's year
//! classified as weekday, weekend, or holiday, grouped into ISO weeks and
//! months, optionally padded to whole Monday–Sunday rows, plus a
//! next-working-day search.
//!
//! This crate is a **façade** that re-exports the `ol-*` workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use onleave::calendar::{CalendarRecord, CalendarService, InMemoryStore};
//! use onleave::time::{Month, Weekday};
//!
//! let service = CalendarService::from_store(
//!     InMemoryStore::new().with_calendar(CalendarRecord::new("IE", 2021)),
//! );
//! let year = service.get_padded_calendar_year("IE", 2021).unwrap().unwrap();
//! let march = year.month(Month::March).unwrap();
//! let last_row = march.weeks.last().unwrap();
//! assert_eq!(last_row.last().unwrap().day_of_week, Weekday::Sunday);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and shared utilities.
pub use ol_core as core;

/// Date, weekday, and month types.
pub use ol_time as time;

/// Calendar grid construction, padding, and workday search.
pub use ol_calendar as calendar;

/// Settings and seed data.
pub use ol_config as config;
