//! The date-time value and the units it is built from.
//!
//! `PackedDateTime` keeps a proleptic Gregorian date and an optional
//! time-of-day in a single `u64`. Its operations are split by concern:
//! field access in `datetime`, time-of-day in `time`, day arithmetic in
//! `arithmetic` and fractional years in `fractional`.

pub(crate) mod datetime;

mod arithmetic;
mod fractional;
mod time;
mod weekday;

#[doc(inline)]
pub use datetime::PackedDateTime;
#[doc(inline)]
pub use weekday::{ParseWeekdayError, Weekday};
