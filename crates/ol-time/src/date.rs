//! `Date` type.
//!
//! Dates are stored as a serial day number in the proleptic Gregorian
//! calendar.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday).
//! * The valid date range is 0001-01-01 to 9999-12-31.

use crate::month::Month;
use crate::weekday::Weekday;
use ol_core::errors::{Error, Result};

/// A calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest representable year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest representable year.
    pub const MAX_YEAR: u16 = 9999;

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(serial_from_ymd(Self::MIN_YEAR, 1, 1));

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(serial_from_ymd(Self::MAX_YEAR, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        let Some(m) = Month::from_number(month) else {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        };
        let days_in = m.days_in(year);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// The first day of `month` in `year`.
    pub fn first_of(year: u16, month: Month) -> Result<Self> {
        Self::from_ymd(year, month.number(), 1)
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn parse_iso(s: &str) -> Result<Self> {
        let bad = || Error::InvalidArgument(format!("'{s}' is not a YYYY-MM-DD date"));
        let parts: Vec<&str> = s.trim().split('-').collect();
        let [y, m, d] = parts.as_slice() else {
            return Err(bad());
        };
        let well_formed = [(y, 4), (m, 2), (d, 2)]
            .iter()
            .all(|(p, len)| p.len() == *len && p.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(bad());
        }
        let y = y.parse::<u16>().map_err(|_| bad())?;
        let m = m.parse::<u8>().map_err(|_| bad())?;
        let d = d.parse::<u8>().map_err(|_| bad())?;
        Self::from_ymd(y, m, d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        let m = ymd_from_serial(self.0).1;
        Month::ALL[m as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 1 → Monday, serial 2 → Tuesday, …
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// ISO-8601 week-numbering year and week (1–53).
    ///
    /// Weeks start on Monday; week 1 is the week holding the year's first
    /// Thursday, so early January days can belong to the previous year's
    /// last week and late December days to week 1 of the next year.
    pub fn iso_year_week(&self) -> (i32, u8) {
        let year = self.year() as i32;
        let ordinal = self.day_of_year() as i32;
        let wd = self.weekday().ordinal() as i32;
        match (ordinal + 10 - wd) / 7 {
            0 => (year - 1, weeks_in_iso_year(year - 1)),
            53 if weeks_in_iso_year(year) == 52 => (year + 1, 1),
            week => (year, week as u8),
        }
    }

    /// ISO-8601 week number (1–53).
    ///
    /// ```
    /// use ol_time::Date;
    /// assert_eq!(Date::from_ymd(2019, 1, 1).unwrap().iso_week(), 1);
    /// assert_eq!(Date::from_ymd(2019, 10, 4).unwrap().iso_week(), 40);
    /// assert_eq!(Date::from_ymd(2020, 12, 31).unwrap().iso_week(), 53);
    /// assert_eq!(Date::from_ymd(2021, 1, 1).unwrap().iso_week(), 53);
    /// ```
    pub fn iso_week(&self) -> u8 {
        self.iso_year_week().1
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).unwrap_or(i32::MAX);
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "{self} {n:+} days leaves the range [{}, {}]",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Date(serial))
    }

    /// The following day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn first_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Interop ───────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

// chrono counts days from the common era with 0001-01-01 as day 1, which is
// exactly our serial.
#[cfg(feature = "chrono")]
impl TryFrom<Date> for chrono::NaiveDate {
    type Error = Error;

    fn try_from(d: Date) -> Result<Self> {
        chrono::NaiveDate::from_num_days_from_ce_opt(d.0)
            .ok_or_else(|| Error::Date(format!("{d} not representable as chrono::NaiveDate")))
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_serial(d.num_days_from_ce())
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub const fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    Month::ALL[month as usize - 1].days_in(year)
}

/// Number of ISO weeks (52 or 53) in ISO year `year`.
///
/// A year has 53 weeks when it starts on a Thursday, or is a leap year
/// starting on a Wednesday.
pub fn weeks_in_iso_year(year: i32) -> u8 {
    let p = |y: i32| (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7);
    if p(year) == 4 || p(year - 1) == 3 {
        53
    } else {
        52
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 0001-01-01.
const fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let py = year as i32 - 1;
    let mut serial = py * 365 + py / 4 - py / 100 + py / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // 146_097 days per 400-year cycle; the estimate is at most one year off.
    let mut y = ((serial as i64 * 400) / 146_097 + 1).clamp(1, 9999) as u16;
    while y > 1 && serial < serial_from_ymd(y, 1, 1) {
        y -= 1;
    }
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        let d = date(1, 1, 1);
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
        assert_eq!(d.weekday(), Weekday::Monday);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (1600, 2, 29),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2016, 12, 31),
            (2023, 6, 15),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = date(y, m, d);
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month().number(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2016, 12, 31).weekday(), Weekday::Saturday);
        assert_eq!(date(2017, 1, 1).weekday(), Weekday::Sunday);
        assert_eq!(date(2021, 2, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2021, 3, 31).weekday(), Weekday::Wednesday);
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(date(2021, 1, 1).day_of_year(), 1);
        assert_eq!(date(2021, 12, 31).day_of_year(), 365);
        assert_eq!(date(2020, 12, 31).day_of_year(), 366);
        assert_eq!(date(2020, 3, 1).day_of_year(), 61);
    }

    #[test]
    fn test_iso_week_year_boundaries() {
        // 2021-01-01 (Friday) belongs to ISO week 53 of 2020
        assert_eq!(date(2021, 1, 1).iso_year_week(), (2020, 53));
        assert_eq!(date(2021, 1, 4).iso_year_week(), (2021, 1));
        // 2019-12-30 (Monday) is already week 1 of 2020
        assert_eq!(date(2019, 12, 30).iso_year_week(), (2020, 1));
        // 2017-01-01 (Sunday) closes week 52 of 2016
        assert_eq!(date(2017, 1, 1).iso_year_week(), (2016, 52));
        assert_eq!(date(2017, 1, 2).iso_year_week(), (2017, 1));
        assert_eq!(date(1, 1, 1).iso_year_week(), (1, 1));
    }

    #[test]
    fn test_weeks_in_iso_year() {
        assert_eq!(weeks_in_iso_year(2015), 53);
        assert_eq!(weeks_in_iso_year(2020), 53);
        assert_eq!(weeks_in_iso_year(2021), 52);
        assert_eq!(weeks_in_iso_year(2026), 53);
    }

    #[test]
    fn test_range_checks() {
        assert!(Date::from_ymd(0, 1, 1).is_err());
        assert!(Date::from_ymd(2021, 2, 29).is_err());
        assert!(Date::from_ymd(2021, 13, 1).is_err());
        assert!(Date::MAX.succ().is_err());
        assert!(Date::MIN.pred().is_err());
        assert_eq!(Date::MAX, date(9999, 12, 31));
    }

    #[test]
    fn test_month_boundaries() {
        let d = date(2024, 2, 15);
        assert_eq!(d.first_of_month(), date(2024, 2, 1));
        assert_eq!(d.end_of_month(), date(2024, 2, 29));
        assert_eq!(date(2023, 12, 31).succ().unwrap(), date(2024, 1, 1));
        assert_eq!(date(2024, 3, 1).pred().unwrap(), date(2024, 2, 29));
        assert_eq!(date(2024, 3, 1) - date(2024, 2, 1), 29);
    }

    #[test]
    fn test_parse_and_display() {
        let d: Date = "2017-01-02".parse().unwrap();
        assert_eq!(d, date(2017, 1, 2));
        assert_eq!(d.to_string(), "2017-01-02");
        assert_eq!(format!("{d:?}"), "Date(2017-01-02)");
        assert!(Date::parse_iso("2017-1-2").is_err());
        assert!(Date::parse_iso("2017-02-30").is_err());
        assert!(Date::parse_iso("yesterday").is_err());
    }
}
