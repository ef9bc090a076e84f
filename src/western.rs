//! Free-form Western calendar dates.
//!
//! Accepted shapes (year always first for numeric forms):
//!   1991-3-23, 1991/03/23, 1991.3.23, 1991 3 23
//!   19910323
//!   1991-03-23T10:00:00, 1991/03/23 10:00, 1991-03-23T10:00:00+09:00
//!   3/23/1991, 03/23/1991 10:15 (US order when the year comes last)
//!   March 23, 1991 / Mar. 23, 1991 / 23 March 1991
//!   Saturday, March 23, 1991
//!
//! Anything else is rejected, in particular bare digit runs that are not
//! exactly eight long, so era-code notation never leaks in here.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

// Year, separator, month, separator, day. Separators are compared after
// matching because the regex crate has no backreferences.
static RE_SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})([-/.]|\s+)([0-9]{1,2})([-/.]|\s+)([0-9]{1,2})$").unwrap()
});

static RE_COMPACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})([0-9]{2})([0-9]{2})$").unwrap());

const DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

// Offset is dropped; the local calendar date is kept.
const OFFSET_DATETIME_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%:z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%:z",
];

// %B also accepts the three-letter abbreviation when parsing. The weekday,
// when given, must agree with the date.
const DATE_PATTERNS: &[&str] = &[
    "%m/%d/%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b. %d, %Y",
    "%b. %d %Y",
    "%d %B %Y",
    "%d %B, %Y",
    "%A, %B %d, %Y",
    "%A %B %d %Y",
    "%a, %d %B %Y",
];

/// Parse a Western calendar date. Time of day, if present, is discarded.
pub fn parse_western(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = RE_SEPARATED.captures(text) {
        let (sep1, sep2) = (&caps[2], &caps[4]);
        let same_sep = sep1 == sep2 || (sep1.trim().is_empty() && sep2.trim().is_empty());
        if !same_sep {
            return None;
        }
        return ymd(&caps[1], &caps[3], &caps[5]);
    }

    if let Some(caps) = RE_COMPACT.captures(text) {
        return ymd(&caps[1], &caps[2], &caps[3]);
    }

    DATETIME_PATTERNS
        .iter()
        .find_map(|p| NaiveDateTime::parse_from_str(text, p).ok())
        .or_else(|| {
            OFFSET_DATETIME_PATTERNS
                .iter()
                .find_map(|p| DateTime::parse_from_str(text, p).ok())
                .map(|dt| dt.naive_local())
        })
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_PATTERNS
                .iter()
                .find_map(|p| NaiveDate::parse_from_str(text, p).ok())
        })
}

fn ymd(y: &str, m: &str, d: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}
