//! Integer tokens written in ASCII digits or kanji numerals.

fn kanji_digit(c: char) -> Option<u32> {
    match c {
        '〇' | '零' => Some(0),
        '一' => Some(1),
        '二' => Some(2),
        '三' => Some(3),
        '四' => Some(4),
        '五' => Some(5),
        '六' => Some(6),
        '七' => Some(7),
        '八' => Some(8),
        '九' => Some(9),
        _ => None,
    }
}

fn kanji_unit(c: char) -> Option<u32> {
    match c {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}

/// Convert a kanji numeral to an integer.
///
/// Two notations are accepted:
///   - multiplicative: 十 = 10, 二十三 = 23, 百五 = 105
///   - positional digit runs: 二三 = 23, 一〇 = 10
///
/// Returns `None` for empty input, unknown characters, a unit that does not
/// decrease (十百), or overflow.
pub fn kanji_to_u32(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }

    if s.chars().all(|c| kanji_digit(c).is_some()) {
        return s
            .chars()
            .try_fold(0u32, |acc, c| acc.checked_mul(10)?.checked_add(kanji_digit(c)?));
    }

    let mut total: u32 = 0;
    let mut pending: Option<u32> = None;
    let mut last_unit = u32::MAX;
    for c in s.chars() {
        if let Some(d) = kanji_digit(c) {
            pending = Some(match pending {
                Some(p) => p.checked_mul(10)?.checked_add(d)?,
                None => d,
            });
        } else if let Some(unit) = kanji_unit(c) {
            if unit >= last_unit {
                return None;
            }
            last_unit = unit;
            // A bare unit means one of it: 十 = 10.
            total = total.checked_add(pending.take().unwrap_or(1).checked_mul(unit)?)?;
        } else {
            return None;
        }
    }
    total.checked_add(pending.unwrap_or(0))
}

/// Parse a year/month/day token: ASCII digits first, then kanji numerals.
pub fn parse_number(token: &str) -> Option<u32> {
    token.parse::<u32>().ok().or_else(|| kanji_to_u32(token))
}
