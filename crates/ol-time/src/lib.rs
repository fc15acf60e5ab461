//! # ol-time
//!
//! Date, weekday, and month types used to build calendar grids.
//!
//! Optional features:
//! * `serde` — ISO `YYYY-MM-DD` (de)serialisation of [`Date`], upper-case
//!   names for [`Weekday`] and [`Month`].
//! * `chrono` — conversions to and from `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use month::Month;
pub use weekday::Weekday;
