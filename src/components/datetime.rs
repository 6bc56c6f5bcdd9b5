//! This module implements `PackedDateTime` and its field level operations.

use core::fmt;

use crate::{
    calendar,
    components::Weekday,
    utils::{self, DAYS_IN_A_400Y_CYCLE},
    DateTimeError, DateTimeResult,
};

// ==== Packed layout ====
//
//   63           36 35    32 31    27 26                  0
//  +---------------+--------+--------+---------------------+
//  | year - MIN    | month  | day    | time-of-day + 1     |
//  +---------------+--------+--------+---------------------+
//
// Month and day are stored zero based. A year, month or day field with all
// bits set is n/a, a time-of-day field of 0 is unset. Comparing the raw words
// thus sorts n/a dates after every valid date and unset times before every
// valid time.

const DAY_SHIFT: u32 = 27;
const MONTH_SHIFT: u32 = 32;
const YEAR_SHIFT: u32 = 36;

pub(crate) const TIME_MASK: u64 = (1 << DAY_SHIFT) - 1;
const NO_DAY: u64 = 0x1F;
const NO_MONTH: u64 = 0x0F;
pub(crate) const NO_YEAR: u64 = 0x0FFF_FFFF;

const DAY_MASK: u64 = NO_DAY << DAY_SHIFT;
const MONTH_MASK: u64 = NO_MONTH << MONTH_SHIFT;
const YEAR_MASK: u64 = NO_YEAR << YEAR_SHIFT;

// A field and every shorter date field set to n/a.
pub(crate) const INVALID_DAY: u64 = DAY_MASK;
pub(crate) const INVALID_MONTH: u64 = MONTH_MASK | DAY_MASK;
pub(crate) const INVALID_YEAR: u64 = YEAR_MASK | MONTH_MASK | DAY_MASK;

/// Number of storable years: every year field value except `NO_YEAR`.
const YEAR_RANGE: i32 = NO_YEAR as i32 - 1;

/// First day of the year from which the day offset to year estimate counts.
///
/// This year is one past a multiple of 400, so the estimate may only fall short.
const ESTIMATE_EPOCH: i64 = utils::shifted_day_offset(PackedDateTime::MIN_YEAR as i64, -399, 0, 0);

/// Aligns day offsets so that 0001-01-01 is a Monday.
const WEEKDAY_ALIGNMENT: i64 = (1 + PackedDateTime::MIN_DAY_OFFSET).rem_euclid(7);

const _: () = {
    assert!(PackedDateTime::MIN_YEAR % 400 == 0);
    assert!(PackedDateTime::MIN_YEAR < 1 && PackedDateTime::MAX_YEAR >= 1);
    assert!((PackedDateTime::MAX_TIME as u64) < TIME_MASK);
};

/// A date-time value in the proleptic Gregorian calendar, packed into 8 bytes.
///
/// A `PackedDateTime` consists of four units, from longer to shorter: year,
/// month, day and time-of-day in milliseconds. Each of them may be n/a, but
/// an n/a year implies an n/a month and an n/a month implies an n/a day, so a
/// value can describe a year, a month or a day, with or without a time-of-day.
///
/// Values are ordered chronologically. For year, month and day an n/a unit
/// sorts after all valid values, while an unset time-of-day sorts before all
/// valid times.
///
/// ```rust
/// use packed_datetime::PackedDateTime;
///
/// let mut date = PackedDateTime::from_ymd(2012, 15, 21);
/// assert_eq!(date.year(), Some(2012));
/// assert_eq!(date.month(), None);
/// assert_eq!(date.day(), None);
///
/// assert!(date.set(2024, 2, 28));
/// date += 1;
/// assert_eq!(date.day(), Some(29));
/// date += 1;
/// assert_eq!((date.month(), date.day()), (Some(3), Some(1)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedDateTime(u64);

// ==== Private API ====

/// Packs a date, invalidating the first illegal unit and all shorter ones.
const fn encode_date(year: i32, month: u8, day: u8) -> u64 {
    if year < PackedDateTime::MIN_YEAR || year > PackedDateTime::MAX_YEAR {
        return INVALID_YEAR;
    }
    let bits = ((year - PackedDateTime::MIN_YEAR) as u64) << YEAR_SHIFT;
    if month == 0 || month > 12 {
        return bits | INVALID_MONTH;
    }
    let bits = bits | ((month as u64 - 1) << MONTH_SHIFT);
    if day == 0 || day > calendar::month_length(year, month) {
        return bits | INVALID_DAY;
    }
    bits | ((day as u64 - 1) << DAY_SHIFT)
}

/// Packs a shifted year with a zero based month and day.
const fn encode_shifted(year: u64, month: u8, day: u8) -> u64 {
    (year << YEAR_SHIFT) | ((month as u64) << MONTH_SHIFT) | ((day as u64) << DAY_SHIFT)
}

/// Returns the biased time-of-day field for `ms`, or the unset field.
pub(crate) const fn encode_time(ms: u32) -> u64 {
    if ms < PackedDateTime::MAX_TIME {
        ms as u64 + 1
    } else {
        0
    }
}

/// Packs the date at a day offset, which is all n/a outside of the storable range.
pub(crate) const fn encode_day_offset(offset: i64) -> u64 {
    if offset < PackedDateTime::MIN_DAY_OFFSET || offset > PackedDateTime::MAX_DAY_OFFSET {
        return INVALID_YEAR;
    }
    // Pretending that all years have the same length yields the correct year in
    // 99.76% of all cases and the year before it in the remaining ones.
    let mut year = (offset - ESTIMATE_EPOCH) * 400 / DAYS_IN_A_400Y_CYCLE - 399;
    let mut is_leap = utils::is_leap_shifted(year);
    let mut day_in_year =
        offset - utils::shifted_day_offset(PackedDateTime::MIN_YEAR as i64, year, 0, 0);
    let year_length = utils::year_length_shifted(year) as i64;
    if day_in_year >= year_length {
        day_in_year -= year_length;
        year += 1;
        is_leap = utils::is_leap_shifted(year);
    }
    match utils::month_and_day(day_in_year as u16, is_leap) {
        Some((month, day)) => encode_shifted(year as u64, month, day),
        None => INVALID_YEAR,
    }
}

impl PackedDateTime {
    /// Creates a `PackedDateTime` from its raw packed representation.
    #[inline]
    pub(crate) const fn from_raw(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub(crate) const fn year_field(&self) -> u64 {
        self.0 >> YEAR_SHIFT
    }

    #[inline]
    pub(crate) const fn month_field(&self) -> u64 {
        (self.0 >> MONTH_SHIFT) & NO_MONTH
    }

    #[inline]
    pub(crate) const fn day_field(&self) -> u64 {
        (self.0 >> DAY_SHIFT) & NO_DAY
    }

    #[inline]
    pub(crate) const fn time_field(&self) -> u64 {
        self.0 & TIME_MASK
    }

    #[inline]
    pub(crate) fn set_year_field(&mut self, year: u64) {
        self.0 = (self.0 & !YEAR_MASK) | (year << YEAR_SHIFT);
    }

    #[inline]
    pub(crate) fn set_month_field(&mut self, month: u64) {
        self.0 = (self.0 & !MONTH_MASK) | (month << MONTH_SHIFT);
    }

    #[inline]
    pub(crate) fn set_day_field(&mut self, day: u64) {
        self.0 = (self.0 & !DAY_MASK) | (day << DAY_SHIFT);
    }

    #[inline]
    pub(crate) fn set_time_field(&mut self, time: u64) {
        self.0 = (self.0 & !TIME_MASK) | time;
    }

    /// Replaces the date fields, keeping time-of-day.
    #[inline]
    pub(crate) fn replace_date(&mut self, date: u64) {
        self.0 = date | self.time_field();
    }

    /// Sets the fields of `pattern` to n/a.
    #[inline]
    pub(crate) fn invalidate(&mut self, pattern: u64) {
        self.0 |= pattern;
    }

    #[inline]
    pub(crate) const fn is_leap_field(&self) -> bool {
        utils::is_leap_shifted(self.year_field() as i64)
    }

    /// Returns the length of the stored month, 0 if it's n/a.
    pub(crate) const fn month_length_field(&self) -> u8 {
        match self.month() {
            Some(month) => {
                let begins = utils::month_begins(self.is_leap_field());
                (begins[month as usize] - begins[month as usize - 1]) as u8
            }
            None => 0,
        }
    }

    /// Maps the n/a state of the date fields onto the error for the longest n/a unit.
    pub(crate) const fn date_error(&self) -> Option<DateTimeError> {
        if !self.has_year() {
            Some(DateTimeError::out_of_range().with_message("year is n/a."))
        } else if !self.has_month() {
            Some(DateTimeError::invalid_month().with_message("month is n/a."))
        } else if !self.has_day() {
            Some(DateTimeError::invalid_day().with_message("day is n/a."))
        } else {
            None
        }
    }
}

// ==== Public API ====

impl PackedDateTime {
    /// The earliest year that a `PackedDateTime` can hold.
    pub const MIN_YEAR: i32 = -(utils::floor_400(1 << 27) as i32);
    /// The latest year that a `PackedDateTime` can hold.
    pub const MAX_YEAR: i32 = Self::MIN_YEAR + YEAR_RANGE;
    /// Exclusive upper bound of time-of-day in milliseconds (30 hours).
    ///
    /// Times beyond 24 hours are permitted to accommodate anomalously long days.
    pub const MAX_TIME: u32 = 30 * crate::MS_PER_HOUR;
    /// The day offset of `MIN_YEAR-01-01`.
    pub const MIN_DAY_OFFSET: i64 = utils::shifted_day_offset(Self::MIN_YEAR as i64, 0, 0, 0);
    /// The day offset of `MAX_YEAR-12-31`.
    pub const MAX_DAY_OFFSET: i64 =
        utils::shifted_day_offset(Self::MIN_YEAR as i64, YEAR_RANGE as i64, 11, 30);
    /// The earliest full date, `MIN_YEAR-01-01`.
    pub const MIN: Self = Self::from_ymd(Self::MIN_YEAR, 1, 1);
    /// The latest full date, `MAX_YEAR-12-31`.
    pub const MAX: Self = Self::from_ymd(Self::MAX_YEAR, 12, 31);

    /// Creates a `PackedDateTime` with all units n/a.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::from_raw(INVALID_YEAR)
    }

    /// Creates a date without time-of-day.
    ///
    /// An illegal unit is set to n/a along with all shorter units: a year
    /// outside of `[MIN_YEAR, MAX_YEAR]` invalidates the whole date, a month
    /// outside of `1..=12` invalidates month and day, and a day outside of the
    /// month invalidates the day.
    #[inline]
    #[must_use]
    pub const fn from_ymd(year: i32, month: u8, day: u8) -> Self {
        Self::from_raw(encode_date(year, month, day))
    }

    /// Creates a date with a time-of-day in milliseconds. Time-of-day is unset
    /// if `ms` is not below [`Self::MAX_TIME`].
    #[inline]
    #[must_use]
    pub const fn from_ymd_time(year: i32, month: u8, day: u8, ms: u32) -> Self {
        Self::from_raw(encode_date(year, month, day) | encode_time(ms))
    }

    /// Creates a value that only holds a year.
    #[inline]
    #[must_use]
    pub const fn year_only(year: i32) -> Self {
        Self::from_raw(encode_date(year, 0, 0))
    }

    /// Creates a value that holds a year and a month.
    #[inline]
    #[must_use]
    pub const fn year_month(year: i32, month: u8) -> Self {
        let bits = encode_date(year, month, 1);
        if bits & INVALID_MONTH == INVALID_MONTH {
            Self::from_raw(bits)
        } else {
            Self::from_raw(bits | INVALID_DAY)
        }
    }

    /// Creates the date at `offset` days from 0001-01-01; all date units are
    /// n/a if the offset is outside of `[MIN_DAY_OFFSET, MAX_DAY_OFFSET]`.
    #[inline]
    #[must_use]
    pub const fn from_day_offset(offset: i64) -> Self {
        Self::from_raw(encode_day_offset(offset))
    }

    /// Creates the date at `offset` days from 0001-01-01 with a time-of-day.
    ///
    /// The time-of-day is honored even if the offset is out of range.
    #[inline]
    #[must_use]
    pub const fn from_day_offset_time(offset: i64, ms: u32) -> Self {
        Self::from_raw(encode_day_offset(offset) | encode_time(ms))
    }

    /// Creates a full date, or returns the error of the first illegal unit.
    pub fn try_from_ymd(year: i32, month: u8, day: u8) -> DateTimeResult<Self> {
        let result = Self::from_ymd(year, month, day);
        match result.date_error() {
            Some(err) => Err(err),
            None => Ok(result),
        }
    }

    /// Creates the date at `offset` days from 0001-01-01, or returns an
    /// `OffsetOverflow` error if the offset is out of range.
    pub fn try_from_day_offset(offset: i64) -> DateTimeResult<Self> {
        if !(Self::MIN_DAY_OFFSET..=Self::MAX_DAY_OFFSET).contains(&offset) {
            return Err(DateTimeError::offset_overflow()
                .with_message("day offset is outside of the representable range."));
        }
        Ok(Self::from_day_offset(offset))
    }

    // ==== Accessors ====

    /// Returns the year, or `None` if it's n/a.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> Option<i32> {
        if self.has_year() {
            Some(self.year_field() as i32 + Self::MIN_YEAR)
        } else {
            None
        }
    }

    /// Returns the month in `1..=12`, or `None` if it's n/a.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Option<u8> {
        if self.has_month() {
            Some(self.month_field() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the day of the month, or `None` if it's n/a.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> Option<u8> {
        if self.has_day() {
            Some(self.day_field() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the one based day of the year, or `None` if the day is n/a.
    #[must_use]
    pub const fn day_in_year(&self) -> Option<u16> {
        if !self.has_day() {
            return None;
        }
        let begins = utils::month_begins(self.is_leap_field());
        Some(begins[self.month_field() as usize] + self.day_field() as u16 + 1)
    }

    /// Returns the number of days since 0001-01-01, or `None` if the day is n/a.
    #[must_use]
    pub const fn day_offset(&self) -> Option<i64> {
        if !self.has_day() {
            return None;
        }
        Some(utils::shifted_day_offset(
            Self::MIN_YEAR as i64,
            self.year_field() as i64,
            self.month_field() as u8,
            self.day_field() as u8,
        ))
    }

    // ==== Validity ====

    #[inline]
    #[must_use]
    pub const fn has_year(&self) -> bool {
        self.year_field() != NO_YEAR
    }

    #[inline]
    #[must_use]
    pub const fn has_month(&self) -> bool {
        self.month_field() != NO_MONTH
    }

    #[inline]
    #[must_use]
    pub const fn has_day(&self) -> bool {
        self.day_field() != NO_DAY
    }

    #[inline]
    #[must_use]
    pub const fn has_time(&self) -> bool {
        self.time_field() != 0
    }

    /// Returns whether this value has a full date and a time-of-day.
    #[inline]
    #[must_use]
    pub const fn is_full_date_time(&self) -> bool {
        self.has_day() && self.has_time()
    }

    /// Returns whether this value holds a full date.
    ///
    /// An alias of [`Self::has_day`], since a valid day implies a valid month and year.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.has_day()
    }

    // ==== Calendar queries ====

    /// Returns whether the year is a leap year; `false` if the year is n/a.
    #[inline]
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        self.has_year() && self.is_leap_field()
    }

    /// Returns 365 or 366, or 0 if the year is n/a.
    #[inline]
    #[must_use]
    pub const fn year_length(&self) -> u16 {
        if self.has_year() {
            utils::year_length_shifted(self.year_field() as i64)
        } else {
            0
        }
    }

    /// Returns the length of the month in days, or 0 if the month is n/a.
    #[inline]
    #[must_use]
    pub const fn month_length(&self) -> u8 {
        self.month_length_field()
    }

    #[inline]
    #[must_use]
    pub const fn is_month_first(&self) -> bool {
        self.day_field() == 0
    }

    /// Returns whether the day is the last one of its month.
    #[inline]
    #[must_use]
    pub const fn is_month_last(&self) -> bool {
        // An n/a day never matches, and an n/a month has length 0.
        self.day_field() + 1 == self.month_length_field() as u64
    }

    /// Returns the day of the week, or `None` if the day is n/a.
    #[must_use]
    pub const fn weekday(&self) -> Option<Weekday> {
        match self.day_offset() {
            Some(offset) => Weekday::from_number(
                ((offset - Self::MIN_DAY_OFFSET + WEEKDAY_ALIGNMENT) % 7) as u8 + 1,
            ),
            None => None,
        }
    }

    // ==== Derived values ====
    //
    // Each of these clears time-of-day. If the unit they need is n/a the date is
    // returned unchanged.

    /// Returns the first day of the month.
    #[must_use]
    pub const fn month_first(&self) -> Self {
        let date = self.0 & !TIME_MASK;
        if !self.has_month() {
            return Self::from_raw(date);
        }
        Self::from_raw(date & !DAY_MASK)
    }

    /// Returns the last day of the month.
    #[must_use]
    pub const fn month_last(&self) -> Self {
        let date = self.0 & !TIME_MASK;
        if !self.has_month() {
            return Self::from_raw(date);
        }
        Self::from_raw((date & !DAY_MASK) | ((self.month_length_field() as u64 - 1) << DAY_SHIFT))
    }

    /// Returns January 1st of the year.
    #[must_use]
    pub const fn year_first(&self) -> Self {
        let date = self.0 & !TIME_MASK;
        if !self.has_year() {
            return Self::from_raw(date);
        }
        Self::from_raw(date & YEAR_MASK)
    }

    /// Returns December 31st of the year.
    #[must_use]
    pub const fn year_last(&self) -> Self {
        let date = self.0 & !TIME_MASK;
        if !self.has_year() {
            return Self::from_raw(date);
        }
        Self::from_raw((date & YEAR_MASK) | encode_shifted(0, 11, 30))
    }

    // ==== Setters ====
    //
    // All date setters leave time-of-day unchanged and return `true` iff every
    // supplied unit was legal.

    /// Sets the date, with the same invalidation rules as [`Self::from_ymd`].
    ///
    /// ```rust
    /// use packed_datetime::PackedDateTime;
    ///
    /// let mut date = PackedDateTime::new();
    /// assert!(!date.set(2012, 2, 30));
    /// assert_eq!((date.year(), date.month(), date.day()), (Some(2012), Some(2), None));
    /// ```
    pub fn set(&mut self, year: i32, month: u8, day: u8) -> bool {
        let date = encode_date(year, month, day);
        self.replace_date(date);
        date & DAY_MASK != DAY_MASK
    }

    /// Sets the date to the first day of `month` in `year`.
    pub fn set_year_month(&mut self, year: i32, month: u8) -> bool {
        self.set(year, month, 1)
    }

    /// Sets the date to January 1st of `year`.
    pub fn set_year(&mut self, year: i32) -> bool {
        self.set(year, 1, 1)
    }

    /// Sets the date to the first day of `month` in the current year.
    ///
    /// Fails and leaves month and day n/a if the year is n/a.
    pub fn set_month(&mut self, month: u8) -> bool {
        match self.year() {
            Some(year) => self.set(year, month, 1),
            None => {
                self.invalidate(INVALID_MONTH);
                false
            }
        }
    }

    /// Sets the day in the current month.
    ///
    /// Fails and leaves the day n/a if the month is n/a.
    pub fn set_day(&mut self, day: u8) -> bool {
        match (self.year(), self.month()) {
            (Some(year), Some(month)) => self.set(year, month, day),
            _ => {
                self.invalidate(INVALID_DAY);
                false
            }
        }
    }

    /// Sets month and day from a one based day of the current year.
    ///
    /// Fails without change if the year is n/a; a day outside of the year
    /// leaves month and day n/a.
    pub fn set_day_in_year(&mut self, day_in_year: u16) -> bool {
        if !self.has_year() {
            return false;
        }
        let position = day_in_year
            .checked_sub(1)
            .and_then(|day| utils::month_and_day(day, self.is_leap_field()));
        match position {
            Some((month, day)) => {
                self.set_month_field(u64::from(month));
                self.set_day_field(u64::from(day));
                true
            }
            None => {
                self.invalidate(INVALID_MONTH);
                false
            }
        }
    }

    /// Sets the date to `offset` days from 0001-01-01, keeping time-of-day.
    pub fn set_day_offset(&mut self, offset: i64) -> bool {
        self.replace_date(encode_day_offset(offset));
        self.has_day()
    }
}

impl Default for PackedDateTime {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PackedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedDateTime")
            .field("year", &self.year())
            .field("month", &self.month())
            .field("day", &self.day())
            .field("time", &self.time())
            .finish()
    }
}
