use chrono::NaiveDate;
use thiserror::Error;

// ── Validation ───────────────────────────────────────────────────────────

/// Why a `(era_code, era_year, month, day)` tuple was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("era code is outside 1..={max}")]
    EraCodeOutOfRange { max: usize },
    #[error("era years start at 1")]
    EraYearZero,
    #[error("not a calendar date")]
    NotACalendarDate,
    #[error("falls after the last day of the era ({end})")]
    AfterEraEnd { end: NaiveDate },
}

/// A structurally parsed tuple that does not name a real, in-era date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("JPTime({era_code}, {era_year}, {month}, {day}) is invalid: {reason}")]
pub struct ValidationError {
    pub era_code: u32,
    pub era_year: u32,
    pub month: u32,
    pub day: u32,
    pub reason: Rejection,
}

impl ValidationError {
    /// The rejected tuple.
    pub fn tuple(&self) -> (u32, u32, u32, u32) {
        (self.era_code, self.era_year, self.month, self.day)
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Every strategy declined the (normalized) input.
    #[error("cannot parse {input:?} to an era date")]
    Unparseable { input: String },
    /// A Gregorian date earlier than the first era.
    #[error("no era covers {date}")]
    NoEraCovers { date: NaiveDate },
}

// ── Era table lookups ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EraError {
    #[error("era code {0} is out of range")]
    CodeOutOfRange(u32),
    #[error("no era covers {0}")]
    NoEraCovers(NaiveDate),
}

/// Any failure raised by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_tuple() {
        let err = ValidationError {
            era_code: 6,
            era_year: 25,
            month: 3,
            day: 23,
            reason: Rejection::EraCodeOutOfRange { max: 5 },
        };
        assert_eq!(
            err.to_string(),
            "JPTime(6, 25, 3, 23) is invalid: era code is outside 1..=5"
        );
        assert_eq!(err.tuple(), (6, 25, 3, 23));
    }

    #[test]
    fn test_umbrella_error_is_transparent() {
        let parse = ParseError::Unparseable {
            input: "abc".into(),
        };
        let any: Error = parse.clone().into();
        assert_eq!(any.to_string(), parse.to_string());
    }
}
