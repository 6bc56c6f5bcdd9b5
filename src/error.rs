//! This module implements `DateTimeError`.

use core::fmt;

/// `DateTimeError`'s error type.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The year is outside of `[MIN_YEAR, MAX_YEAR]`.
    #[default]
    OutOfRange,
    /// The month is outside of `1..=12`.
    InvalidMonth,
    /// The day is outside of the month.
    InvalidDay,
    /// A time-of-day unit is outside of its bound.
    InvalidTime,
    /// Day arithmetic left `[MIN_DAY_OFFSET, MAX_DAY_OFFSET]`.
    OffsetOverflow,
    /// The operation requires a full date, but a field is n/a.
    Incomplete,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => "OutOfRange",
            Self::InvalidMonth => "InvalidMonth",
            Self::InvalidDay => "InvalidDay",
            Self::InvalidTime => "InvalidTime",
            Self::OffsetOverflow => "OffsetOverflow",
            Self::Incomplete => "Incomplete",
        }
        .fmt(f)
    }
}

/// The error returned by the checked `PackedDateTime` operations.
///
/// The unchecked setters report failure through their `bool` return value
/// and leave the affected fields n/a, so this type is only produced by the
/// `try_*` and `checked_*` family and by the `icu_calendar` bridge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateTimeError {
    kind: ErrorKind,
    msg: &'static str,
}

impl DateTimeError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self { kind, msg: "" }
    }

    /// Creates an `OutOfRange` error.
    #[inline]
    #[must_use]
    pub const fn out_of_range() -> Self {
        Self::new(ErrorKind::OutOfRange)
    }

    /// Creates an `InvalidMonth` error.
    #[inline]
    #[must_use]
    pub const fn invalid_month() -> Self {
        Self::new(ErrorKind::InvalidMonth)
    }

    /// Creates an `InvalidDay` error.
    #[inline]
    #[must_use]
    pub const fn invalid_day() -> Self {
        Self::new(ErrorKind::InvalidDay)
    }

    /// Creates an `InvalidTime` error.
    #[inline]
    #[must_use]
    pub const fn invalid_time() -> Self {
        Self::new(ErrorKind::InvalidTime)
    }

    /// Creates an `OffsetOverflow` error.
    #[inline]
    #[must_use]
    pub const fn offset_overflow() -> Self {
        Self::new(ErrorKind::OffsetOverflow)
    }

    /// Creates an `Incomplete` error.
    #[inline]
    #[must_use]
    pub const fn incomplete() -> Self {
        Self::new(ErrorKind::Incomplete)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub const fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.msg
    }
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }

        Ok(())
    }
}

impl core::error::Error for DateTimeError {}
