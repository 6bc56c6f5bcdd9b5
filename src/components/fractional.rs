//! This module implements conversions between `PackedDateTime` and fractional years.

use core_maths::CoreFloat;
use num_traits::ToPrimitive;

use crate::{
    calendar,
    components::{datetime::INVALID_YEAR, PackedDateTime},
    options::YearFraction,
    utils,
};

impl PackedDateTime {
    /// Returns the date as its year plus the elapsed fraction of that year.
    ///
    /// N/a month and day units count as zero, so unlike the ordering of
    /// `PackedDateTime` a value with an n/a month maps onto the same number
    /// as January 1st. Returns `None` if the year is n/a.
    ///
    /// ```rust
    /// use packed_datetime::{options::YearFraction, PackedDateTime};
    ///
    /// let date = PackedDateTime::from_ymd(2024, 7, 2);
    /// assert_eq!(date.to_fractional_years(YearFraction::EqualDays, false), Some(2024.5));
    /// ```
    #[must_use]
    pub fn to_fractional_years(&self, mode: YearFraction, include_time: bool) -> Option<f64> {
        let year = f64::from(self.year()?);
        let Some(month) = self.month() else {
            return Some(year);
        };
        let mut elapsed_days = 0.0;
        if let Some(day) = self.day() {
            elapsed_days = f64::from(day - 1);
            if include_time {
                elapsed_days += self.part_of_24h().unwrap_or(0.0);
            }
        }
        let month = usize::from(month - 1);
        let fraction = match mode {
            YearFraction::EqualDays => {
                let begins = utils::month_begins(self.is_leap_field());
                (f64::from(begins[month]) + elapsed_days) / f64::from(begins[12])
            }
            YearFraction::EqualMonths => {
                (elapsed_days / f64::from(self.month_length()) + month as f64) / 12.0
            }
        };
        Some(year + fraction)
    }

    /// Sets the date whose start lies closest to `years`.
    ///
    /// The integer part of `years` selects the year and the fractional part
    /// runs through that year according to `mode`. Time-of-day is left
    /// unchanged. Returns `false` and makes the date n/a if `years` is not
    /// finite or the resulting year is out of range.
    pub fn set_fractional_years(&mut self, years: f64, mode: YearFraction) -> bool {
        let floor = years.floor();
        let Some(year) = floor.to_i32() else {
            self.invalidate(INVALID_YEAR);
            return false;
        };
        let fraction = years - floor;
        let (year, month, day) = match mode {
            YearFraction::EqualDays => {
                let index = (fraction * f64::from(calendar::year_length(year))).round() as u16;
                match utils::month_and_day(index, calendar::is_leap_year(year)) {
                    Some((month, day)) => (Some(year), month + 1, day + 1),
                    None => (year.checked_add(1), 1, 1),
                }
            }
            YearFraction::EqualMonths => {
                let position = fraction * 12.0;
                let month = (position.floor() as u8).min(11) + 1;
                let length = calendar::month_length(year, month);
                let day = ((position - f64::from(month - 1)) * f64::from(length)).round() as u8 + 1;
                if day <= length {
                    (Some(year), month, day)
                } else if month < 12 {
                    (Some(year), month + 1, 1)
                } else {
                    (year.checked_add(1), 1, 1)
                }
            }
        };
        match year {
            Some(year) => self.set(year, month, day),
            None => {
                self.invalidate(INVALID_YEAR);
                false
            }
        }
    }
}
