//! Typed manuscript rows

use csv::StringRecord;

use crate::diagnostics::SkipReason;
use crate::schema::{ILLUSTRATED, MANUSCRIPT_SCHEMA, PLACE_BROAD, YEAR_END, YEAR_START};

/// Flag values counted as "illustrated" (compared case-insensitively)
const TRUTHY: [&str; 3] = ["true", "yes", "1"];

/// The four fields of a manuscript row that the report uses.
///
/// `year_start > year_end` is kept as found in the data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuscriptRecord {
    pub year_start: i32,
    pub year_end: i32,
    pub place_broad: String,
    pub is_illustrated: bool,
}

impl ManuscriptRecord {
    /// Validate a raw CSV row. Fields are trimmed before use.
    pub fn from_row(row: &StringRecord) -> Result<Self, SkipReason> {
        let expected = MANUSCRIPT_SCHEMA.min_columns();
        if row.len() < expected {
            return Err(SkipReason::TooFewColumns {
                found: row.len(),
                expected,
            });
        }

        let start = non_empty(row, YEAR_START)?;
        let end = non_empty(row, YEAR_END)?;
        let place = non_empty(row, PLACE_BROAD)?;

        Ok(Self {
            year_start: parse_year(start, YEAR_START)?,
            year_end: parse_year(end, YEAR_END)?,
            place_broad: place.to_string(),
            is_illustrated: is_truthy(field(row, ILLUSTRATED)),
        })
    }

    /// Closed-interval overlap with `[start, end]`
    pub fn overlaps(&self, start: i32, end: i32) -> bool {
        self.year_start <= end && self.year_end >= start
    }
}

/// `true`, `yes` or `1`, any case. Everything else is false.
pub fn is_truthy(raw: &str) -> bool {
    let raw = raw.trim();
    TRUTHY.iter().any(|t| raw.eq_ignore_ascii_case(t))
}

fn field(row: &StringRecord, idx: usize) -> &str {
    row.get(idx).map_or("", str::trim)
}

fn non_empty(row: &StringRecord, idx: usize) -> Result<&str, SkipReason> {
    let value = field(row, idx);
    if value.is_empty() {
        return Err(SkipReason::MissingField {
            column: MANUSCRIPT_SCHEMA.name(idx),
        });
    }
    Ok(value)
}

fn parse_year(value: &str, idx: usize) -> Result<i32, SkipReason> {
    value.parse().map_err(|_| SkipReason::InvalidYear {
        column: MANUSCRIPT_SCHEMA.name(idx),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(start: &str, end: &str, place: &str, flag: &str) -> StringRecord {
        StringRecord::from(vec![
            "MS1", "GL 1", "Cotton Nero D.iv", "8th", start, end, place, "Lindisfarne",
            "Insular", flag, "Carpet pages", "British Library", "",
        ])
    }

    #[test]
    fn parses_valid_row() {
        let rec = ManuscriptRecord::from_row(&row("715", "720", "Britain", "TRUE")).unwrap();
        assert_eq!(
            rec,
            ManuscriptRecord {
                year_start: 715,
                year_end: 720,
                place_broad: "Britain".into(),
                is_illustrated: true,
            }
        );
    }

    #[test]
    fn trims_fields() {
        let rec = ManuscriptRecord::from_row(&row(" 800 ", "810 ", " Britain ", " yes ")).unwrap();
        assert_eq!(rec.year_start, 800);
        assert_eq!(rec.year_end, 810);
        assert_eq!(rec.place_broad, "Britain");
        assert!(rec.is_illustrated);
    }

    #[test]
    fn short_row_is_skipped() {
        let short = StringRecord::from(vec!["a", "b", "c", "d", "700", "710", "Britain", "x", "y"]);
        assert_eq!(
            ManuscriptRecord::from_row(&short),
            Err(SkipReason::TooFewColumns { found: 9, expected: 10 })
        );
    }

    #[test]
    fn ten_columns_is_enough() {
        let narrow =
            StringRecord::from(vec!["a", "b", "c", "d", "700", "710", "Britain", "x", "y", "1"]);
        let rec = ManuscriptRecord::from_row(&narrow).unwrap();
        assert!(rec.is_illustrated);
    }

    #[test]
    fn empty_required_fields_are_skipped() {
        assert_eq!(
            ManuscriptRecord::from_row(&row("", "720", "Britain", "TRUE")),
            Err(SkipReason::MissingField { column: "Production_Year_Start" })
        );
        assert_eq!(
            ManuscriptRecord::from_row(&row("700", "  ", "Britain", "TRUE")),
            Err(SkipReason::MissingField { column: "Production_Year_End" })
        );
        assert_eq!(
            ManuscriptRecord::from_row(&row("700", "720", "", "TRUE")),
            Err(SkipReason::MissingField { column: "Production_Place_Broad" })
        );
    }

    #[test]
    fn empty_flag_is_not_illustrated() {
        let rec = ManuscriptRecord::from_row(&row("700", "720", "Britain", "")).unwrap();
        assert!(!rec.is_illustrated);
    }

    #[test]
    fn non_integer_year_is_skipped() {
        assert_eq!(
            ManuscriptRecord::from_row(&row("c. 800", "820", "Britain", "no")),
            Err(SkipReason::InvalidYear {
                column: "Production_Year_Start",
                value: "c. 800".into(),
            })
        );
        assert!(matches!(
            ManuscriptRecord::from_row(&row("800", "820.5", "Britain", "no")),
            Err(SkipReason::InvalidYear { column: "Production_Year_End", .. })
        ));
    }

    #[test]
    fn reversed_bounds_are_kept() {
        let rec = ManuscriptRecord::from_row(&row("900", "850", "Britain", "no")).unwrap();
        assert_eq!((rec.year_start, rec.year_end), (900, 850));
    }

    #[test]
    fn truthy_tokens() {
        for t in ["true", "TRUE", "True", "yes", "YES", "1", " 1 "] {
            assert!(is_truthy(t), "{t:?} should be truthy");
        }
        for t in ["", "false", "no", "0", "maybe", "partial", "y", "t"] {
            assert!(!is_truthy(t), "{t:?} should be falsy");
        }
    }

    #[test]
    fn overlap_is_inclusive() {
        let point = ManuscriptRecord {
            year_start: 700,
            year_end: 700,
            place_broad: "Britain".into(),
            is_illustrated: false,
        };
        assert!(point.overlaps(600, 700));
        assert!(point.overlaps(700, 800));
        assert!(!point.overlaps(701, 800));
        assert!(!point.overlaps(600, 699));
    }
}
