use serde::{Deserialize, Serialize};

// ── Era table entry ──────────────────────────────────────────────────────

/// One row of the era table, as printed by `jptime eras`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraRecord {
    pub code: u8,
    /// Kanji name: 明治, 大正, …
    pub name: String,
    /// Single-letter Western abbreviation: M, T, S, H, R
    pub abbreviation: String,
    /// ISO date of the first day of the era
    pub begin: String,
    /// ISO date of the last day; absent for the current era
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Era-year of the last day; absent for the current era
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_year: Option<u32>,
}

// ── Parsed / converted date ──────────────────────────────────────────────

/// A validated era date together with its Gregorian equivalent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraDateRecord {
    pub era_code: u8,
    pub era_name: String,
    pub era_year: u32,
    pub month: u32,
    pub day: u32,
    /// ISO date, e.g. "1991-03-23"
    pub gregorian: String,
}

impl EraDateRecord {
    /// The canonical `(era_code, era_year, month, day)` tuple.
    pub fn to_tuple(&self) -> (u8, u32, u32, u32) {
        (self.era_code, self.era_year, self.month, self.day)
    }

    /// Japanese notation, e.g. "平成3年3月23日".
    pub fn display_ja(&self) -> String {
        format!(
            "{}{}年{}月{}日",
            self.era_name, self.era_year, self.month, self.day
        )
    }
}

// ── Batch output line ────────────────────────────────────────────────────

/// One line of `jptime batch` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchLine {
    pub input: String,
    #[serde(default)]
    pub result: Option<EraDateRecord>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heisei_3() -> EraDateRecord {
        EraDateRecord {
            era_code: 4,
            era_name: "平成".into(),
            era_year: 3,
            month: 3,
            day: 23,
            gregorian: "1991-03-23".into(),
        }
    }

    #[test]
    fn test_display_ja() {
        assert_eq!(heisei_3().display_ja(), "平成3年3月23日");
        assert_eq!(heisei_3().to_tuple(), (4, 3, 3, 23));
    }

    #[test]
    fn test_batch_line_keeps_null_fields() {
        let failed = BatchLine {
            input: "???".into(),
            result: None,
            error: Some("cannot parse".into()),
        };
        let json = serde_json::to_string(&failed).unwrap();
        assert_eq!(
            json,
            r#"{"input":"???","result":null,"error":"cannot parse"}"#
        );
    }

    #[test]
    fn test_era_record_current_era_has_no_end() {
        let reiwa = EraRecord {
            code: 5,
            name: "令和".into(),
            abbreviation: "R".into(),
            begin: "2019-05-01".into(),
            end: None,
            max_year: None,
        };
        let json = serde_json::to_string(&reiwa).unwrap();
        assert!(!json.contains("end"));
        let back: EraRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reiwa);
    }
}
