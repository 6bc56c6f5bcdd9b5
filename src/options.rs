//! Options for conversions of `PackedDateTime`.

use core::{fmt, str::FromStr};

/// How the fractional part of a year is distributed over its days.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearFraction {
    /// Every day of a year has the same length, so days of leap years are
    /// slightly shorter (1/366 vs. 1/365).
    #[default]
    EqualDays,
    /// Every month of a year has the same length (1/12), so the days of a
    /// month are 1/(12 * 28) up to 1/(12 * 31) long.
    EqualMonths,
}

/// A parsing error for `YearFraction`.
#[derive(Debug, Clone, Copy)]
pub struct ParseYearFractionError;

impl fmt::Display for ParseYearFractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid YearFraction")
    }
}

impl FromStr for YearFraction {
    type Err = ParseYearFractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "equalDays" => Ok(Self::EqualDays),
            "equalMonths" => Ok(Self::EqualMonths),
            _ => Err(ParseYearFractionError),
        }
    }
}

impl fmt::Display for YearFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EqualDays => "equalDays",
            Self::EqualMonths => "equalMonths",
        }
        .fmt(f)
    }
}
