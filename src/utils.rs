//! Utility calendar equations for the packed date-time kernel.
//!
//! Every equation in this module operates on years that are shifted into
//! non-negative range relative to an anchor year divisible by 400. The
//! proleptic Gregorian calendar repeats exactly every 400 years, so the shift
//! never changes whether a year is a leap year, and it lets us use bit shifts
//! and truncating division in place of floored division.

/// Number of days in a full 400 year Gregorian cycle.
pub(crate) const DAYS_IN_A_400Y_CYCLE: i64 = 146_097;

/// Anchor for the free standing calendar functions, which accept any `i32` year.
pub(crate) const I32_ANCHOR: i64 = floor_400(i32::MIN as i64);

/// Zero based day-in-year of the first day of each month, plus the year length.
pub(crate) const MONTH_BEGINS: [u16; 13] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
/// `MONTH_BEGINS` for leap years.
pub(crate) const MONTH_BEGINS_LEAP: [u16; 13] =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

/// Rounds `year` down to the closest multiple of 400.
pub(crate) const fn floor_400(year: i64) -> i64 {
    year.div_euclid(400) * 400
}

// ==== Begin Shifted Year Equations ====

/// Returns whether a shifted year is a leap year.
///
/// Since the anchor is a multiple of 400, divisibility by 400 of the shifted
/// year is equivalent to divisibility by both 100 and 16.
#[inline]
pub(crate) const fn is_leap_shifted(year: i64) -> bool {
    year & 0x03 == 0 && (year % 100 != 0 || year & 0x0F == 0)
}

#[inline]
pub(crate) const fn year_length_shifted(year: i64) -> u16 {
    if is_leap_shifted(year) {
        366
    } else {
        365
    }
}

#[inline]
pub(crate) const fn month_begins(is_leap: bool) -> &'static [u16; 13] {
    if is_leap {
        &MONTH_BEGINS_LEAP
    } else {
        &MONTH_BEGINS
    }
}

/// Returns the number of days from 0001-01-01 to the date at `anchor + year`,
/// zero based `month` and zero based `day`.
///
/// `anchor` must be divisible by 400 and `year` must not be below -399.
pub(crate) const fn shifted_day_offset(anchor: i64, year: i64, month: u8, day: u8) -> i64 {
    // January and February are counted forward from the start of their year and
    // all other months backwards from the start of the following year. Neither
    // count depends on whether the date's own year is a leap year.
    let (years, days_before_month) = if month <= 1 {
        (year + 399, 31 * month as i64)
    } else {
        let m = month as i64;
        (year + 400, 30 * m + ((m + 1 + (m >> 3)) >> 1) - 367)
    };
    // The extra 399 or 400 years keep `years` non-negative; `base` takes the
    // additional cycle back out.
    let base = (anchor / 400 - 1) * DAYS_IN_A_400Y_CYCLE;
    base + day as i64 + days_before_month + years * 365 + (years >> 2)
        - ((3 * (years / 100 + 1)) >> 2)
}

/// Splits a zero based day-in-year into a zero based month and day.
///
/// Returns `None` if `day_in_year` is not inside the year.
pub(crate) const fn month_and_day(day_in_year: u16, is_leap: bool) -> Option<(u8, u8)> {
    let begins = month_begins(is_leap);
    if day_in_year >= begins[12] {
        return None;
    }
    // No month is longer than 31 days, so dividing by 32 yields either the
    // month itself or the one before it.
    let mut month = (day_in_year >> 5) as usize;
    if day_in_year >= begins[month + 1] {
        month += 1;
    }
    Some((month as u8, (day_in_year - begins[month]) as u8))
}

// ==== End Shifted Year Equations ====
