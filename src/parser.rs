use std::sync::LazyLock;

use log::{debug, trace};
use regex::Regex;

use crate::date::{EraDate, from_gregorian};
use crate::era::match_symbol;
use crate::error::ParseError;
use crate::normalize::normalize;
use crate::numeral::parse_number;
use crate::western::parse_western;

// ── Regex patterns ─────────────────────────────────────────────────
//
// Real data examples:
//   Era symbol:
//     平成3年3月23日
//     平成元年三月二十三日
//     昭和45年03月23日
//     S45.3.23
//   Era code (gyymmdd):
//     4030323
//     H030323
//   Western:
//     1991-3-23
//     1930/03/23
//     19910323
//     1991年3月23日

// A year, month or day token: one run of ASCII digits or kanji numerals.
static RE_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[〇一二三四五六七八九十]+").unwrap());

type Strategy = fn(&str) -> Option<EraDate>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("era symbol", try_era_symbol),
    ("era code", try_era_code),
    ("western", try_western),
];

/// Parse a date written in era-symbol, era-code or Western notation.
///
/// The input is NFKC-normalized once, then each notation is tried in turn;
/// the first one that yields a valid era date wins.
pub fn parse_date(text: &str) -> Result<EraDate, ParseError> {
    let normalized = normalize(text);

    for (name, strategy) in STRATEGIES {
        if let Some(date) = strategy(&normalized) {
            debug!("{name}: {normalized:?} -> {date}");
            return Ok(date);
        }
        debug!("{name}: declined {normalized:?}");
    }

    Err(ParseError::Unparseable { input: normalized })
}

/// `{symbol}{year}年{month}月{day}日` and dotted variants like `S45.3.23`.
/// Numbers may be ASCII or kanji; 元年 means year one.
pub(crate) fn try_era_symbol(text: &str) -> Option<EraDate> {
    let text = text.replace("元年", "一年");
    let (era, rest) = match_symbol(&text)?;

    let tokens: Vec<&str> = RE_NUMERAL.find_iter(rest).map(|m| m.as_str()).collect();
    trace!("{era} tokens: {tokens:?}");
    let [year, month, day] = tokens.as_slice() else {
        return None;
    };

    EraDate::new(
        u32::from(era.code()),
        parse_number(year)?,
        parse_number(month)?,
        parse_number(day)?,
    )
    .ok()
}

/// `gyymmdd` where `g` is the era code, or `{symbol}yymmdd`.
pub(crate) fn try_era_code(text: &str) -> Option<EraDate> {
    let (code, yymmdd) = match match_symbol(text) {
        Some((era, rest)) => (u64::from(era.code()), rest.trim().parse::<u64>().ok()?),
        None => {
            let n = text.trim().parse::<u64>().ok()?;
            (n / 1_000_000, n % 1_000_000)
        }
    };
    let (year, month, day) = split_yymmdd(yymmdd);

    EraDate::new(
        u32::try_from(code).ok()?,
        u32::try_from(year).ok()?,
        u32::try_from(month).ok()?,
        u32::try_from(day).ok()?,
    )
    .ok()
}

/// Western calendar text, with 年/月/日 read as separators.
pub(crate) fn try_western(text: &str) -> Option<EraDate> {
    let stripped = text.replace(['年', '月', '日'], " ");
    let date = parse_western(&stripped)?;
    from_gregorian(date).ok()
}

/// 320323 → (32, 3, 23)
pub(crate) fn split_yymmdd(yymmdd: u64) -> (u64, u64, u64) {
    let (year, mmdd) = (yymmdd / 10_000, yymmdd % 10_000);
    (year, mmdd / 100, mmdd % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuple(d: Option<EraDate>) -> Option<(u8, u32, u32, u32)> {
        d.map(|d| d.to_tuple())
    }

    #[test]
    fn test_split_yymmdd() {
        assert_eq!(split_yymmdd(321123), (32, 11, 23));
        assert_eq!(split_yymmdd(320323), (32, 3, 23));
        assert_eq!(split_yymmdd(10125), (1, 1, 25));
    }

    #[test]
    fn test_era_symbol_first_year() {
        assert_eq!(
            tuple(try_era_symbol("平成元年3月23日")),
            Some((4, 1, 3, 23))
        );
        assert_eq!(
            tuple(try_era_symbol("平成元年三月二三日")),
            Some((4, 1, 3, 23))
        );
    }

    #[test]
    fn test_era_symbol_requires_three_numbers() {
        assert_eq!(try_era_symbol("平成31年3月3日10時"), None);
        assert_eq!(try_era_symbol("平成31年3月"), None);
    }

    #[test]
    fn test_era_code_with_symbol_prefix() {
        assert_eq!(tuple(try_era_code("H030323")), Some((4, 3, 3, 23)));
        assert_eq!(tuple(try_era_code("S451103")), Some((3, 45, 11, 3)));
        assert_eq!(try_era_code("H03.03.23"), None);
    }

    #[test]
    fn test_era_code_digits_only() {
        assert_eq!(tuple(try_era_code("4030323")), Some((4, 3, 3, 23)));
        assert_eq!(try_era_code("19910323"), None);
        assert_eq!(try_era_code("0250323"), None);
        assert_eq!(try_era_code("-4030323"), None);
    }

    #[test]
    fn test_western_strips_kanji_separators() {
        assert_eq!(tuple(try_western("1991年3月23日")), Some((4, 3, 3, 23)));
        assert_eq!(tuple(try_western("1868-01-24")), None);
    }

    #[test]
    fn test_parse_date_reports_normalized_input() {
        assert_eq!(
            parse_date("ＡＢＣ"),
            Err(ParseError::Unparseable {
                input: "ABC".into()
            })
        );
    }
}
