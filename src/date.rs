//! The validated era date `(era, era_year, month, day)`.

use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::era::{Era, era_by_date};
use crate::error::{ParseError, Rejection, ValidationError};

/// A date in the Japanese era calendar.
///
/// Only constructible through validation, so every value maps to a real
/// Gregorian date. Equality and ordering follow the `(code, year, month, day)`
/// tuple; ordering is chronological only within a single era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct EraDate {
    era: Era,
    era_year: u32,
    month: u32,
    day: u32,
    // Computed from the four fields above.
    #[serde(skip)]
    gregorian: NaiveDate,
}

impl EraDate {
    /// Validate `(era_code, era_year, month, day)`.
    ///
    /// Era years count from 1, so year 0 is rejected. Beyond that only the
    /// upper bound of the era is checked: `令和1年1月3日` is accepted even
    /// though it precedes 2019-05-01. Callers that need strict membership
    /// can compare against [`Era::begin`].
    pub fn new(era_code: u32, era_year: u32, month: u32, day: u32) -> Result<Self, ValidationError> {
        let reject = |reason| ValidationError {
            era_code,
            era_year,
            month,
            day,
            reason,
        };

        let era = Era::from_code(era_code).ok_or(reject(Rejection::EraCodeOutOfRange {
            max: Era::ALL.len(),
        }))?;

        if era_year == 0 {
            return Err(reject(Rejection::EraYearZero));
        }

        let gregorian = gregorian_year(era, era_year)
            .and_then(|year| NaiveDate::from_ymd_opt(year, month, day))
            .ok_or(reject(Rejection::NotACalendarDate))?;

        if gregorian > era.end() {
            return Err(reject(Rejection::AfterEraEnd { end: era.end() }));
        }

        Ok(Self {
            era,
            era_year,
            month,
            day,
            gregorian,
        })
    }

    pub fn era(&self) -> Era {
        self.era
    }

    pub fn era_code(&self) -> u8 {
        self.era.code()
    }

    pub fn era_year(&self) -> u32 {
        self.era_year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_tuple(&self) -> (u8, u32, u32, u32) {
        (self.era.code(), self.era_year, self.month, self.day)
    }

    pub fn to_gregorian(&self) -> NaiveDate {
        self.gregorian
    }
}

/// `era_year + era.begin.year - 1`, or `None` if it leaves chrono's range.
fn gregorian_year(era: Era, era_year: u32) -> Option<i32> {
    i32::try_from(era_year)
        .ok()?
        .checked_add(era.begin().year())?
        .checked_sub(1)
}

/// Convenience alias for [`EraDate::new`].
pub fn make_era_date(
    era_code: u32,
    era_year: u32,
    month: u32,
    day: u32,
) -> Result<EraDate, ValidationError> {
    EraDate::new(era_code, era_year, month, day)
}

/// Map a Gregorian date onto the era that contains it.
pub fn from_gregorian(date: NaiveDate) -> Result<EraDate, ParseError> {
    let era = era_by_date(date).map_err(|_| ParseError::NoEraCovers { date })?;
    let era_year = u32::try_from(date.year() - era.begin().year() + 1)
        .map_err(|_| ParseError::NoEraCovers { date })?;
    EraDate::new(u32::from(era.code()), era_year, date.month(), date.day())
        .map_err(|_| ParseError::NoEraCovers { date })
}

impl Hash for EraDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.gregorian.hash(state);
    }
}

impl std::fmt::Display for EraDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "JPTime({}, {}, {}, {})",
            self.era.code(),
            self.era_year,
            self.month,
            self.day
        )
    }
}

impl From<EraDate> for NaiveDate {
    fn from(date: EraDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<NaiveDate> for EraDate {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        from_gregorian(date)
    }
}

impl FromStr for EraDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parser::parse_date(s)
    }
}
