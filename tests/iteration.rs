//! Long running consistency checks over consecutive days.

use packed_datetime::{calendar, PackedDateTime, Weekday};

const DAYS: i64 = 1_100_000;

#[test]
fn increment_matches_day_offsets() {
    let start = calendar::day_offset(-1500, 1, 1).unwrap();
    let mut date = PackedDateTime::from_ymd(-1500, 1, 1);
    let mut weekday = date.weekday().unwrap().number();
    for offset in start..start + DAYS {
        assert_eq!(date, PackedDateTime::from_day_offset(offset), "{offset}");
        assert_eq!(date.day_offset(), Some(offset));
        let (year, month, day) = (date.year().unwrap(), date.month().unwrap(), date.day().unwrap());
        assert_eq!(calendar::day_offset(year, month, day), Some(offset));
        assert_eq!(date.day_in_year(), calendar::day_in_year(year, month, day));
        assert_eq!(date.is_month_first(), day == 1);
        assert_eq!(date.is_month_last(), day == calendar::month_length(year, month));
        assert_eq!(date.weekday().map(Weekday::number), Some(weekday));
        weekday = weekday % 7 + 1;
        date.increment();
    }
    assert_eq!(date.day_offset(), Some(start + DAYS));
}

#[test]
fn decrement_matches_day_offsets() {
    let end = calendar::day_offset(1500, 12, 31).unwrap();
    let mut date = PackedDateTime::from_day_offset_time(end, 1);
    for offset in (end - DAYS..=end).rev() {
        assert_eq!(date.day_offset(), Some(offset));
        assert_eq!(date.time(), Some(1));
        date.decrement();
    }
    assert_eq!(date.day_offset(), Some(end - DAYS - 1));
}

#[test]
fn offset_bijection_at_the_range_ends() {
    let low = PackedDateTime::MIN_DAY_OFFSET..PackedDateTime::MIN_DAY_OFFSET + 500_000;
    let high = PackedDateTime::MAX_DAY_OFFSET - 500_000..=PackedDateTime::MAX_DAY_OFFSET;
    let mut expected = PackedDateTime::MIN;
    for offset in low {
        let date = PackedDateTime::from_day_offset(offset);
        assert_eq!(date, expected);
        assert_eq!(date.day_offset(), Some(offset));
        expected.increment();
    }
    let mut expected = PackedDateTime::from_day_offset(PackedDateTime::MAX_DAY_OFFSET - 500_000);
    for offset in high {
        let date = PackedDateTime::from_day_offset(offset);
        assert_eq!(date, expected);
        assert_eq!(date.day_offset(), Some(offset));
        expected.increment();
    }
    assert_eq!(expected, PackedDateTime::new());
}

#[test]
fn large_jumps_agree_with_offsets() {
    let date = PackedDateTime::from_ymd_time(2024, 2, 29, 12);
    let offset = date.day_offset().unwrap();
    let mut days = 1_i64;
    while days < PackedDateTime::MAX_DAY_OFFSET - offset {
        for delta in [days, -days] {
            let moved = date + delta;
            assert_eq!(moved.day_offset(), Some(offset + delta), "{delta}");
            assert_eq!(moved.time(), Some(12));
            assert_eq!(moved - delta, date);
        }
        days = days * 3 + 1;
    }
}
