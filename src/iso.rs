//! This module bridges `PackedDateTime` and `icu_calendar`'s ISO dates.
//!
//! `icu_calendar::Date<Iso>` holds a full proleptic Gregorian date without a
//! time-of-day, so conversions only carry the year, month and day units.

use icu_calendar::{types::Weekday as IcuWeekday, Date, Iso};

use crate::{components::Weekday, DateTimeError, DateTimeResult, PackedDateTime};

impl PackedDateTime {
    /// Converts the date units into an `icu_calendar` ISO date.
    ///
    /// Fails if any date unit is n/a.
    ///
    /// ```rust
    /// use packed_datetime::PackedDateTime;
    ///
    /// let date = PackedDateTime::from_ymd(2024, 2, 29).to_iso_date().unwrap();
    /// assert_eq!(date.day_of_month().0, 29);
    /// assert!(PackedDateTime::year_month(2024, 2).to_iso_date().is_err());
    /// ```
    pub fn to_iso_date(&self) -> DateTimeResult<Date<Iso>> {
        if let Some(err) = self.date_error() {
            return Err(err);
        }
        let (Some(year), Some(month), Some(day)) = (self.year(), self.month(), self.day()) else {
            return Err(DateTimeError::incomplete());
        };
        Date::try_new_iso(year, month, day).map_err(|_| {
            DateTimeError::out_of_range().with_message("date is not representable as an ISO date.")
        })
    }

    /// Sets the date units from an `icu_calendar` ISO date, keeping time-of-day.
    pub fn set_iso_date(&mut self, date: &Date<Iso>) -> bool {
        self.set(
            date.year().extended_year(),
            date.month().ordinal,
            date.day_of_month().0,
        )
    }
}

impl From<Date<Iso>> for PackedDateTime {
    fn from(date: Date<Iso>) -> Self {
        Self::from_ymd(
            date.year().extended_year(),
            date.month().ordinal,
            date.day_of_month().0,
        )
    }
}

impl PartialEq<Date<Iso>> for PackedDateTime {
    fn eq(&self, other: &Date<Iso>) -> bool {
        self.year() == Some(other.year().extended_year())
            && self.month() == Some(other.month().ordinal)
            && self.day() == Some(other.day_of_month().0)
    }
}

impl PartialEq<PackedDateTime> for Date<Iso> {
    fn eq(&self, other: &PackedDateTime) -> bool {
        other == self
    }
}

impl From<IcuWeekday> for Weekday {
    fn from(weekday: IcuWeekday) -> Self {
        match weekday {
            IcuWeekday::Monday => Self::Monday,
            IcuWeekday::Tuesday => Self::Tuesday,
            IcuWeekday::Wednesday => Self::Wednesday,
            IcuWeekday::Thursday => Self::Thursday,
            IcuWeekday::Friday => Self::Friday,
            IcuWeekday::Saturday => Self::Saturday,
            IcuWeekday::Sunday => Self::Sunday,
        }
    }
}
