//! This module implements the time-of-day unit of `PackedDateTime`.
//!
//! Time-of-day is stored in milliseconds with a bias of one, so that a stored
//! 0 means unset. Every setter accepts times in `[0, MAX_TIME)` and unsets the
//! time-of-day when its input is out of bounds.

use crate::{
    components::{
        datetime::{encode_time, TIME_MASK},
        PackedDateTime,
    },
    MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND,
};

/// Exclusive upper bound of the hours unit.
const MAX_HOURS: u16 = (PackedDateTime::MAX_TIME / MS_PER_HOUR) as u16;

/// Rounds a non-negative millisecond count half up and adds the storage bias.
#[inline]
fn biased_round(ms: f64) -> u64 {
    // floor(ms + 1.5) == round_half_up(ms) + 1
    ((2.0 * ms + 3.0) as u64) >> 1
}

// ==== Private API ====

impl PackedDateTime {
    /// Stores an already biased time-of-day, unsetting it if out of bounds.
    fn store_biased_time(&mut self, biased: u64) -> bool {
        if biased == 0 || biased > u64::from(Self::MAX_TIME) {
            self.set_time_field(0);
            return false;
        }
        self.set_time_field(biased & TIME_MASK);
        true
    }
}

// ==== Public API ====

impl PackedDateTime {
    /// Returns time-of-day in milliseconds, or `None` if it's unset.
    #[inline]
    #[must_use]
    pub const fn time(&self) -> Option<u32> {
        if self.has_time() {
            Some(self.time_field() as u32 - 1)
        } else {
            None
        }
    }

    /// Returns time-of-day as `(hours, minutes, seconds, milliseconds)`.
    #[must_use]
    pub fn time_parts(&self) -> Option<(u16, u16, u16, u16)> {
        let time = self.time()?;
        let hours = time / MS_PER_HOUR;
        let minutes = time % MS_PER_HOUR / MS_PER_MINUTE;
        let seconds = time % MS_PER_MINUTE / MS_PER_SECOND;
        let milliseconds = time % MS_PER_SECOND;
        Some((
            hours as u16,
            minutes as u16,
            seconds as u16,
            milliseconds as u16,
        ))
    }

    /// Returns time-of-day as a fraction of 24 hours.
    #[must_use]
    pub fn part_of_24h(&self) -> Option<f64> {
        self.time()
            .map(|time| f64::from(time) / f64::from(MS_PER_DAY))
    }

    /// Sets time-of-day in milliseconds; valid iff `ms < MAX_TIME`.
    pub fn set_time_ms(&mut self, ms: u32) -> bool {
        let time = encode_time(ms);
        self.set_time_field(time);
        time != 0
    }

    /// Sets time-of-day from its units.
    ///
    /// Valid iff `milliseconds < 1000`, `seconds < 60`, `minutes < 60` and
    /// `hours < 30`.
    pub fn set_time(&mut self, hours: u16, minutes: u16, seconds: u16, milliseconds: u16) -> bool {
        if milliseconds >= 1000 || seconds >= 60 || minutes >= 60 || hours >= MAX_HOURS {
            self.unset_time();
            return false;
        }
        let ms = u32::from(milliseconds)
            + MS_PER_SECOND
                * (u32::from(seconds) + 60 * (u32::from(minutes) + 60 * u32::from(hours)));
        self.set_time_ms(ms)
    }

    /// Sets time-of-day with fractional seconds, rounded to the nearest millisecond.
    ///
    /// ```rust
    /// use packed_datetime::PackedDateTime;
    ///
    /// let mut date = PackedDateTime::from_ymd(2024, 1, 1);
    /// assert!(date.set_time_with_seconds(12, 30, 1.2345));
    /// assert_eq!(date.time_parts(), Some((12, 30, 1, 235)));
    /// assert!(!date.set_time_with_seconds(12, 30, 60.0));
    /// assert!(!date.has_time());
    /// ```
    pub fn set_time_with_seconds(&mut self, hours: u16, minutes: u16, seconds: f64) -> bool {
        if !(0.0..60.0).contains(&seconds) || minutes >= 60 || hours >= MAX_HOURS {
            self.unset_time();
            return false;
        }
        let whole = u64::from(MS_PER_MINUTE) * (u64::from(minutes) + 60 * u64::from(hours));
        self.store_biased_time(biased_round(seconds * f64::from(MS_PER_SECOND)) + whole)
    }

    /// Sets time-of-day as a fraction of 24 hours, rounded to the nearest
    /// millisecond. Valid iff `0 <= part < MAX_TIME / 24h`.
    pub fn set_part_of_24h(&mut self, part: f64) -> bool {
        let bound = f64::from(Self::MAX_TIME) / f64::from(MS_PER_DAY);
        if !(0.0..bound).contains(&part) {
            self.unset_time();
            return false;
        }
        self.store_biased_time(biased_round(part * f64::from(MS_PER_DAY)))
    }

    /// Unsets time-of-day.
    #[inline]
    pub fn unset_time(&mut self) {
        self.set_time_field(0);
    }
}
