//! Loading seed documents into a working calendar service.

use std::path::PathBuf;

use ol_calendar::{CalendarService, DayType};
use ol_config::{ConfigError, Settings, StoreConfig};
use ol_time::Date;

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn toml_seed_drives_the_service() {
    let store = StoreConfig {
        seed_file: Some(data("ireland_2017.toml")),
    }
    .open_store()
    .unwrap();
    assert_eq!(store.calendar_count(), 2);
    assert_eq!(store.holiday_count(), 5);

    let service = CalendarService::from_store(store);
    let year = service.get_calendar_year("IE", 2017).unwrap().unwrap();
    let observed = year.days().find(|d| d.date == date(2017, 1, 2)).unwrap();
    assert_eq!(observed.day_type, DayType::Holiday);
    assert_eq!(
        observed.description.as_deref(),
        Some("Substitute day for New Year's Day")
    );
    assert_eq!(service.get_next_work_day(date(2016, 12, 31)).unwrap(), date(2017, 1, 3));
    assert_eq!(service.get_calendar_year("FR", 2017).unwrap(), None);
}

#[test]
fn json_seed_is_accepted() {
    let store = StoreConfig {
        seed_file: Some(data("ireland_2017.json")),
    }
    .open_store()
    .unwrap();
    assert_eq!(store.calendar_count(), 1);
    assert_eq!(store.holiday_count(), 2);
}

#[test]
fn invalid_holiday_date_is_reported() {
    let result = StoreConfig {
        seed_file: Some(data("bad_date.json")),
    }
    .open_store();
    assert!(matches!(result, Err(ConfigError::ConfigCrateError(_))));
}

#[test]
fn unsupported_extension_is_rejected() {
    let result = StoreConfig {
        seed_file: Some(data("../test_seed.rs")),
    }
    .open_store();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn settings_point_at_seed_file() {
    let toml = format!(
        "[store]\nseed_file = {:?}\n",
        data("ireland_2017.toml").display().to_string()
    );
    let settings = Settings::from_toml_str(&toml).unwrap();
    let store = settings.store.open_store().unwrap();
    assert_eq!(store.calendar_count(), 2);
}
