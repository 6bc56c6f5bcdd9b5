//! Cross-checks against `icu_calendar`'s ISO calendar.

use icu_calendar::Date;
use packed_datetime::{PackedDateTime, Weekday};

#[test]
fn agrees_with_icu_across_many_cycles() {
    let mut date = PackedDateTime::from_ymd(-2001, 1, 1);
    let end = PackedDateTime::from_ymd(2401, 1, 1);
    while date < end {
        let iso = date.to_iso_date().unwrap();
        assert_eq!(date, iso);
        assert_eq!(date.weekday(), Some(Weekday::from(iso.day_of_week())));
        assert_eq!(date.day_in_year(), Some(iso.day_of_year().0));
        assert_eq!(date.is_leap_year(), iso.is_in_leap_year());
        assert_eq!(date.month_length(), iso.days_in_month());
        assert_eq!(date.year_length(), iso.days_in_year());
        assert_eq!(PackedDateTime::from(iso), date);
        date.increment();
    }
}

#[test]
fn setting_from_icu_keeps_time_of_day() {
    let mut date = PackedDateTime::from_ymd_time(1, 1, 1, 86_399_999);
    for (year, month, day) in [(1582, 10, 15), (-9999, 1, 1), (9999, 12, 31), (0, 2, 29)] {
        let iso = Date::try_new_iso(year, month, day).unwrap();
        assert!(date.set_iso_date(&iso));
        assert_eq!(iso, date);
        assert_eq!(date.time(), Some(86_399_999));
    }
}
