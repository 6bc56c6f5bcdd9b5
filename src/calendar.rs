//! Proleptic Gregorian calendar functions.
//!
//! These functions accept every `i32` year, including the ones outside of the
//! range that a [`PackedDateTime`][crate::PackedDateTime] can hold. Year 0
//! exists and is a leap year (1 B.C.).

use crate::utils::{self, I32_ANCHOR};

/// Returns whether `year` is a leap year.
///
/// ```rust
/// use packed_datetime::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// ```
#[inline]
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    utils::is_leap_shifted(year as i64 - I32_ANCHOR)
}

/// Returns the number of days in `year`: 365 or 366.
#[inline]
#[must_use]
pub const fn year_length(year: i32) -> u16 {
    utils::year_length_shifted(year as i64 - I32_ANCHOR)
}

/// Returns the number of days in `month` of `year`, or 0 if `month` is not
/// in `1..=12`.
#[must_use]
pub const fn month_length(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Returns the one based day of the year of the given date, or `None` if the
/// month or day is invalid.
#[must_use]
pub const fn day_in_year(year: i32, month: u8, day: u8) -> Option<u16> {
    if day == 0 || day > month_length(year, month) {
        return None;
    }
    let begins = utils::month_begins(is_leap_year(year));
    Some(begins[month as usize - 1] + day as u16)
}

/// Returns the number of days from 0001-01-01 to the given date, or `None`
/// if the month or day is invalid.
///
/// ```rust
/// use packed_datetime::calendar::day_offset;
///
/// assert_eq!(day_offset(1, 1, 1), Some(0));
/// assert_eq!(day_offset(1970, 1, 1), Some(719_162));
/// assert_eq!(day_offset(0, 12, 31), Some(-1));
/// assert_eq!(day_offset(2021, 2, 29), None);
/// ```
#[must_use]
pub const fn day_offset(year: i32, month: u8, day: u8) -> Option<i64> {
    // This simultaneously rejects invalid months, whose length is 0.
    if day == 0 || day > month_length(year, month) {
        return None;
    }
    Some(utils::shifted_day_offset(
        I32_ANCHOR,
        year as i64 - I32_ANCHOR,
        month - 1,
        day - 1,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gregorian_leap_rule() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(0));
        assert!(!is_leap_year(-1));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
        assert!(!is_leap_year(i32::MAX));
        assert!(is_leap_year(i32::MIN));
    }

    #[test]
    fn lengths() {
        assert_eq!(year_length(2023), 365);
        assert_eq!(year_length(2024), 366);
        assert_eq!(year_length(1900), 365);
        assert_eq!(month_length(2021, 2), 28);
        assert_eq!(month_length(2020, 2), 29);
        assert_eq!(month_length(2021, 4), 30);
        assert_eq!(month_length(2021, 12), 31);
        assert_eq!(month_length(2021, 0), 0);
        assert_eq!(month_length(2021, 13), 0);
        assert_eq!(month_length(-7, 13), 0);
    }

    #[test]
    fn days_in_year() {
        assert_eq!(day_in_year(2023, 1, 1), Some(1));
        assert_eq!(day_in_year(2023, 3, 1), Some(60));
        assert_eq!(day_in_year(2024, 3, 1), Some(61));
        assert_eq!(day_in_year(2024, 12, 31), Some(366));
        assert_eq!(day_in_year(2024, 12, 32), None);
        assert_eq!(day_in_year(2024, 13, 1), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(day_offset(1, 1, 1), Some(0));
        assert_eq!(day_offset(2, 1, 1), Some(365));
        assert_eq!(day_offset(2000, 1, 1), Some(730_119));
        assert_eq!(day_offset(2024, 1, 1), Some(738_885));
        assert_eq!(day_offset(0, 1, 1), Some(-366));
        assert_eq!(day_offset(0, 3, 1), Some(-306));
        assert_eq!(day_offset(2021, 2, 29), None);
        assert_eq!(day_offset(2021, 13, 1), None);
        assert_eq!(day_offset(2021, 1, 0), None);
    }

    #[test]
    fn offsets_at_the_ends_of_i32() {
        assert_eq!(day_offset(i32::MIN, 1, 1), Some(-784_352_296_671));
        assert_eq!(day_offset(i32::MIN, 12, 31), Some(-784_352_296_306));
        assert_eq!(day_offset(i32::MAX, 1, 1), Some(784_352_295_574));
        assert_eq!(day_offset(i32::MAX, 12, 31), Some(784_352_295_938));
    }

    #[test]
    fn consecutive_offsets() {
        let mut expected = day_offset(-401, 1, 1).unwrap();
        for year in -401..=401 {
            for month in 1..=12 {
                for day in 1..=month_length(year, month) {
                    assert_eq!(day_offset(year, month, day), Some(expected));
                    expected += 1;
                }
            }
        }
    }
}
