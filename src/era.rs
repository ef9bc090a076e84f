//! Static table of the modern Japanese imperial eras (元号).
//!
//! The five eras from Meiji onward form a closed set. Each one carries a
//! 1-based code (the leading digit of the `gyymmdd` notation used on
//! government forms), its Gregorian bounds, and the symbols it is written
//! with: the kanji name, a one-letter abbreviation and the Unicode era
//! ligature.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::error::EraError;

// ── Era ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[repr(u8)]
pub enum Era {
    Meiji = 1,  // 明治
    Taisho = 2, // 大正
    Showa = 3,  // 昭和
    Heisei = 4, // 平成
    Reiwa = 5,  // 令和
}

impl Era {
    /// Every era, in code order (which is also chronological order).
    pub const ALL: [Era; 5] = [
        Era::Meiji,
        Era::Taisho,
        Era::Showa,
        Era::Heisei,
        Era::Reiwa,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u32) -> Option<Self> {
        let index = usize::try_from(code).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Meiji => "明治",
            Self::Taisho => "大正",
            Self::Showa => "昭和",
            Self::Heisei => "平成",
            Self::Reiwa => "令和",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Meiji => "M",
            Self::Taisho => "T",
            Self::Showa => "S",
            Self::Heisei => "H",
            Self::Reiwa => "R",
        }
    }

    /// The single-codepoint era square (㍾ ㍽ ㍼ ㍻ ㋿).
    pub fn ligature(self) -> char {
        match self {
            Self::Meiji => '\u{337e}',
            Self::Taisho => '\u{337d}',
            Self::Showa => '\u{337c}',
            Self::Heisei => '\u{337b}',
            Self::Reiwa => '\u{32ff}',
        }
    }

    /// (first day, last day) as (y, m, d). The current era has no last day.
    fn bounds_ymd(self) -> ((i32, u32, u32), Option<(i32, u32, u32)>) {
        match self {
            Self::Meiji => ((1868, 1, 25), Some((1912, 7, 29))),
            Self::Taisho => ((1912, 7, 30), Some((1926, 12, 24))),
            Self::Showa => ((1926, 12, 25), Some((1989, 1, 7))),
            Self::Heisei => ((1989, 1, 8), Some((2019, 4, 30))),
            Self::Reiwa => ((2019, 5, 1), None),
        }
    }

    fn index(self) -> usize {
        usize::from(self.code()) - 1
    }

    /// First day of the era, inclusive.
    pub fn begin(self) -> NaiveDate {
        ERA_BOUNDS[self.index()].0
    }

    /// Last day of the era, inclusive. `NaiveDate::MAX` for the current era.
    pub fn end(self) -> NaiveDate {
        ERA_BOUNDS[self.index()].1
    }

    pub fn is_current(self) -> bool {
        self.bounds_ymd().1.is_none()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        self.begin() <= date && date <= self.end()
    }

    /// Era-year of the era's last day, e.g. 64 for Showa.
    pub fn max_year(self) -> Option<u32> {
        if self.is_current() {
            return None;
        }
        u32::try_from(self.end().year() - self.begin().year() + 1).ok()
    }

    /// Anchored pattern recognising any of the era's symbols.
    fn symbol_regex(self) -> String {
        format!(
            "^(?:{}|{}|{})",
            regex::escape(self.name()),
            regex::escape(self.abbreviation()),
            regex::escape(&self.ligature().to_string()),
        )
    }
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Static tables ────────────────────────────────────────────────────

static ERA_BOUNDS: LazyLock<[(NaiveDate, NaiveDate); 5]> = LazyLock::new(|| {
    fn ymd((y, m, d): (i32, u32, u32)) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("era bounds are calendar dates")
    }
    Era::ALL.map(|era| {
        let (begin, end) = era.bounds_ymd();
        (ymd(begin), end.map_or(NaiveDate::MAX, ymd))
    })
});

static SYMBOL_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    Era::ALL.map(|era| Regex::new(&era.symbol_regex()).expect("era symbol regex"))
});

// ── Lookups ──────────────────────────────────────────────────────────

/// Era with the given 1-based code.
pub fn era_by_code(code: u32) -> Result<Era, EraError> {
    Era::from_code(code).ok_or(EraError::CodeOutOfRange(code))
}

/// First era whose `[begin, end]` contains `date`.
pub fn era_by_date(date: NaiveDate) -> Result<Era, EraError> {
    Era::ALL
        .into_iter()
        .find(|era| era.contains(date))
        .ok_or(EraError::NoEraCovers(date))
}

/// Probe for an era symbol at the very start of `text`.
///
/// Returns the era and the text after the symbol. A miss is not an error:
/// callers use this to decide which notation they are looking at.
pub fn match_symbol(text: &str) -> Option<(Era, &str)> {
    Era::ALL
        .into_iter()
        .zip(SYMBOL_PATTERNS.iter())
        .find_map(|(era, re)| re.find(text).map(|m| (era, &text[m.end()..])))
}
