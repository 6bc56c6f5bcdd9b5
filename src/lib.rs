//! The `packed_datetime` crate provides a proleptic Gregorian date with an
//! optional time-of-day, packed into a single `u64`.
//!
//! ```rust
//! use packed_datetime::{PackedDateTime, Weekday};
//!
//! let mut date = PackedDateTime::from_ymd(2024, 2, 28);
//! date += 2;
//! assert_eq!((date.year(), date.month(), date.day()), (Some(2024), Some(3), Some(1)));
//! assert_eq!(date.weekday(), Some(Weekday::Friday));
//!
//! // Units can be n/a, in which case every shorter unit is n/a as well.
//! let year = PackedDateTime::year_only(2024);
//! assert!(year.has_year() && !year.has_month());
//! assert!(year < PackedDateTime::from_ymd(2025, 1, 1));
//! ```
//!
//! A `PackedDateTime` holds years from [`PackedDateTime::MIN_YEAR`] to
//! [`PackedDateTime::MAX_YEAR`] and a time-of-day of up to 30 hours with
//! millisecond precision. Values order by year, then month, then day, then
//! time-of-day, with an n/a unit ordering after every valid one.
//!
//! Operations that can fail come in two flavors. Setters return `false` and
//! leave the affected units n/a, while the `try_` and `checked_` functions
//! return a [`DateTimeError`].
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    unused_crate_dependencies,
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // The packed layout is built on deliberate integer narrowing.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap,
)]

#[cfg(feature = "std")]
extern crate std;

pub mod calendar;
pub mod error;
pub mod iso;
pub mod options;

mod components;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::DateTimeError;

/// The `packed_datetime` result type
pub type DateTimeResult<T> = Result<T, DateTimeError>;

#[doc(inline)]
pub use components::{PackedDateTime, ParseWeekdayError, Weekday};

// Relevant numeric constants
/// Milliseconds per second constant: 1e+3
pub const MS_PER_SECOND: u32 = 1000;
/// Milliseconds per minute constant: 6e+4
pub const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;
/// Milliseconds per hour constant: 3.6e+6
pub const MS_PER_HOUR: u32 = 60 * MS_PER_MINUTE;
/// Milliseconds per day constant: 8.64e+7
pub const MS_PER_DAY: u32 = 24 * MS_PER_HOUR;
