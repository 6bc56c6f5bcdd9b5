//! This module implements day arithmetic on `PackedDateTime`.
//!
//! Arithmetic only touches the date units; time-of-day is left unchanged.
//! Moving outside of `[MIN_DAY_OFFSET, MAX_DAY_OFFSET]` makes the whole date
//! n/a and never wraps. Values without a full date are left as they are.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::{
    components::{
        datetime::{encode_day_offset, INVALID_YEAR, NO_YEAR},
        PackedDateTime,
    },
    utils, DateTimeError, DateTimeResult,
};

/// Number of days between `MIN_DAY_OFFSET` and `MAX_DAY_OFFSET`.
const OFFSET_SPAN: u64 = (PackedDateTime::MAX_DAY_OFFSET - PackedDateTime::MIN_DAY_OFFSET) as u64;

// ==== Private API ====

impl PackedDateTime {
    /// Moves the date `days` days into the future.
    fn advance(&mut self, days: u64) {
        if !self.has_day() {
            return;
        }
        // Stay inside the current year via the month tables when possible.
        if days < 366 {
            let is_leap = self.is_leap_field();
            let begins = utils::month_begins(is_leap);
            let target = begins[self.month_field() as usize] + self.day_field() as u16 + days as u16;
            if let Some((month, day)) = utils::month_and_day(target, is_leap) {
                self.set_month_field(u64::from(month));
                self.set_day_field(u64::from(day));
                return;
            }
        }
        self.move_by_offset(days, i64::checked_add);
    }

    /// Moves the date `days` days into the past.
    fn retreat(&mut self, days: u64) {
        if !self.has_day() {
            return;
        }
        if days < 366 {
            let is_leap = self.is_leap_field();
            let begins = utils::month_begins(is_leap);
            let current = begins[self.month_field() as usize] + self.day_field() as u16;
            if let Some(target) = current.checked_sub(days as u16) {
                if let Some((month, day)) = utils::month_and_day(target, is_leap) {
                    self.set_month_field(u64::from(month));
                    self.set_day_field(u64::from(day));
                    return;
                }
            }
        }
        self.move_by_offset(days, i64::checked_sub);
    }

    /// Round trips through the day offset, invalidating the date on overflow.
    fn move_by_offset(&mut self, days: u64, op: fn(i64, i64) -> Option<i64>) {
        let target = self.day_offset().and_then(|offset| {
            if days > OFFSET_SPAN {
                return None;
            }
            op(offset, days as i64)
        });
        match target {
            Some(offset)
                if (Self::MIN_DAY_OFFSET..=Self::MAX_DAY_OFFSET).contains(&offset) =>
            {
                self.replace_date(encode_day_offset(offset));
            }
            _ => {
                #[cfg(feature = "log")]
                log::debug!("moving {self:?} by {days} days left the representable range");
                self.invalidate(INVALID_YEAR);
            }
        }
    }
}

// ==== Public API ====

impl PackedDateTime {
    /// Moves the date to the following day.
    ///
    /// Stepping past `MAX` makes the whole date n/a.
    pub fn increment(&mut self) {
        if !self.has_day() {
            return;
        }
        let day = self.day_field();
        if day < 27 || day + 1 < u64::from(self.month_length_field()) {
            self.set_day_field(day + 1);
            return;
        }
        self.set_day_field(0);
        let month = self.month_field() + 1;
        if month < 12 {
            self.set_month_field(month);
            return;
        }
        self.set_month_field(0);
        let year = self.year_field() + 1;
        if year == NO_YEAR {
            #[cfg(feature = "log")]
            log::debug!("incrementing past the latest representable date");
            self.invalidate(INVALID_YEAR);
            return;
        }
        self.set_year_field(year);
    }

    /// Moves the date to the preceding day.
    ///
    /// Stepping before `MIN` makes the whole date n/a.
    pub fn decrement(&mut self) {
        if !self.has_day() {
            return;
        }
        let day = self.day_field();
        if day > 0 {
            self.set_day_field(day - 1);
            return;
        }
        let month = self.month_field();
        if month > 0 {
            self.set_month_field(month - 1);
            self.set_day_field(u64::from(self.month_length_field()) - 1);
            return;
        }
        let year = self.year_field();
        if year == 0 {
            #[cfg(feature = "log")]
            log::debug!("decrementing past the earliest representable date");
            self.invalidate(INVALID_YEAR);
            return;
        }
        self.set_year_field(year - 1);
        self.set_month_field(11);
        self.set_day_field(30);
    }

    /// Returns the following day.
    #[must_use]
    pub fn next_day(&self) -> Self {
        let mut result = *self;
        result.increment();
        result
    }

    /// Returns the preceding day.
    #[must_use]
    pub fn previous_day(&self) -> Self {
        let mut result = *self;
        result.decrement();
        result
    }

    /// Adds `days`, returning an error if this value has no full date or the
    /// result is out of range.
    pub fn checked_add_days(&self, days: i64) -> DateTimeResult<Self> {
        if !self.has_day() {
            return Err(
                DateTimeError::incomplete().with_message("day arithmetic requires a full date.")
            );
        }
        let result = *self + days;
        if !result.has_day() {
            return Err(DateTimeError::offset_overflow()
                .with_message("day arithmetic left the representable range."));
        }
        Ok(result)
    }

    /// Subtracts `days`, returning an error if this value has no full date or
    /// the result is out of range.
    pub fn checked_sub_days(&self, days: i64) -> DateTimeResult<Self> {
        if !self.has_day() {
            return Err(
                DateTimeError::incomplete().with_message("day arithmetic requires a full date.")
            );
        }
        let result = *self - days;
        if !result.has_day() {
            return Err(DateTimeError::offset_overflow()
                .with_message("day arithmetic left the representable range."));
        }
        Ok(result)
    }

    /// Returns the number of days from `self` to `other`, disregarding
    /// time-of-day, or `None` if either value has no full date.
    #[must_use]
    pub fn days_until(&self, other: &Self) -> Option<i64> {
        Some(other.day_offset()? - self.day_offset()?)
    }
}

impl AddAssign<i64> for PackedDateTime {
    fn add_assign(&mut self, days: i64) {
        if days < 0 {
            self.retreat(days.unsigned_abs());
        } else {
            self.advance(days.unsigned_abs());
        }
    }
}

impl SubAssign<i64> for PackedDateTime {
    fn sub_assign(&mut self, days: i64) {
        if days < 0 {
            self.advance(days.unsigned_abs());
        } else {
            self.retreat(days.unsigned_abs());
        }
    }
}

impl Add<i64> for PackedDateTime {
    type Output = Self;

    fn add(mut self, days: i64) -> Self {
        self += days;
        self
    }
}

impl Sub<i64> for PackedDateTime {
    type Output = Self;

    fn sub(mut self, days: i64) -> Self {
        self -= days;
        self
    }
}
