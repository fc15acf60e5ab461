//! Next working day search.

use proptest::prelude::*;

use ol_calendar::{next_workday, HolidayLookup, HolidayRecord, InMemoryStore, NoHolidays};
use ol_time::Date;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn christmas_2017() -> InMemoryStore {
    InMemoryStore::new()
        .with_holiday(HolidayRecord::new(date(2017, 1, 2), "New Year (observed)"))
        .with_holiday(HolidayRecord::new(date(2017, 12, 25), "Christmas Day"))
        .with_holiday(HolidayRecord::new(date(2017, 12, 26), "St. Stephen's Day"))
        .with_holiday(HolidayRecord::new(date(2018, 1, 1), "New Year's Day"))
}

#[test]
fn saturday_before_observed_new_year() {
    // Sat 31 Dec → Sun 1 Jan (weekend) → Mon 2 Jan (holiday) → Tue 3 Jan
    assert_eq!(next_workday(date(2016, 12, 31), &christmas_2017()).unwrap(), date(2017, 1, 3));
}

#[test]
fn christmas_week() {
    let store = christmas_2017();
    // Fri 22 Dec → weekend → Mon 25, Tue 26 holidays → Wed 27
    assert_eq!(next_workday(date(2017, 12, 22), &store).unwrap(), date(2017, 12, 27));
    // Fri 29 Dec → weekend → Mon 1 Jan holiday → Tue 2 Jan
    assert_eq!(next_workday(date(2017, 12, 29), &store).unwrap(), date(2018, 1, 2));
}

#[test]
fn holidays_are_not_country_scoped() {
    // One store serves every country, so the search needs no country.
    let store = christmas_2017();
    assert!(store.find_holiday(date(2017, 12, 25)).is_some());
    assert_eq!(next_workday(date(2017, 12, 24), &store).unwrap(), date(2017, 12, 27));
}

fn holiday_set() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..60, 0..20)
}

proptest! {
    #[test]
    fn result_is_the_first_working_day_after(offset in 0i32..3650, holidays in holiday_set()) {
        let start = date(2010, 1, 1).add_days(offset).unwrap();
        let mut store = InMemoryStore::new();
        for h in &holidays {
            store.insert_holiday(HolidayRecord::new(start.add_days(*h).unwrap(), "Holiday"));
        }

        let next = next_workday(start, &store).unwrap();
        prop_assert!(next > start);
        prop_assert!(!next.weekday().is_weekend());
        prop_assert!(store.find_holiday(next).is_none());

        let mut d = start.succ().unwrap();
        while d < next {
            prop_assert!(d.weekday().is_weekend() || store.find_holiday(d).is_some());
            d = d.succ().unwrap();
        }
    }

    #[test]
    fn without_holidays_at_most_three_days(offset in 0i32..3650) {
        let start = date(2010, 1, 1).add_days(offset).unwrap();
        let next = next_workday(start, &NoHolidays).unwrap();
        prop_assert!((1..=3).contains(&(next - start)));
    }
}
