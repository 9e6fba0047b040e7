//! Query window validation

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

pub const MIN_YEAR: i32 = 700;
pub const MAX_YEAR: i32 = 1100;

/// Rejected caller input. Raised before the data file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidQueryWindow {
    /// Single year outside `[MIN_YEAR, MAX_YEAR]`
    OutOfRange { year: i32 },
    /// A range bound outside `[MIN_YEAR, MAX_YEAR]`
    RangeOutOfBounds { start: i32, end: i32 },
    Reversed { start: i32, end: i32 },
    BadFormat { input: String },
}

impl fmt::Display for InvalidQueryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { .. } => {
                write!(f, "Year must be between {MIN_YEAR} and {MAX_YEAR}.")
            }
            Self::RangeOutOfBounds { .. } => write!(
                f,
                "Both years in the range must be between {MIN_YEAR} and {MAX_YEAR}."
            ),
            Self::Reversed { .. } => {
                write!(f, "Start year cannot be after end year in the range.")
            }
            Self::BadFormat { .. } => write!(f, "Year range must be in YYYY-YYYY format."),
        }
    }
}

impl std::error::Error for InvalidQueryWindow {}

/// Inclusive production-year window `[year_start, year_end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryWindow {
    year_start: i32,
    year_end: i32,
}

fn in_domain(year: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&year)
}

impl QueryWindow {
    pub fn new(year_start: i32, year_end: i32) -> Result<Self, InvalidQueryWindow> {
        if !in_domain(year_start) || !in_domain(year_end) {
            return Err(InvalidQueryWindow::RangeOutOfBounds {
                start: year_start,
                end: year_end,
            });
        }
        if year_start > year_end {
            return Err(InvalidQueryWindow::Reversed {
                start: year_start,
                end: year_end,
            });
        }
        Ok(Self {
            year_start,
            year_end,
        })
    }

    /// `[year, year]`
    pub fn single(year: i32) -> Result<Self, InvalidQueryWindow> {
        if !in_domain(year) {
            return Err(InvalidQueryWindow::OutOfRange { year });
        }
        Ok(Self {
            year_start: year,
            year_end: year,
        })
    }

    pub fn year_start(&self) -> i32 {
        self.year_start
    }

    pub fn year_end(&self) -> i32 {
        self.year_end
    }
}

impl fmt::Display for QueryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year_start, self.year_end)
    }
}

/// Parses `YYYY-YYYY`
impl FromStr for QueryWindow {
    type Err = InvalidQueryWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InvalidQueryWindow::BadFormat { input: s.to_string() };
        let parts: Vec<&str> = s.split('-').collect();
        let [start, end] = parts.as_slice() else {
            return Err(bad());
        };
        let start: i32 = start.trim().parse().map_err(|_| bad())?;
        let end: i32 = end.trim().parse().map_err(|_| bad())?;
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_year() {
        let w = QueryWindow::single(850).unwrap();
        assert_eq!((w.year_start(), w.year_end()), (850, 850));
    }

    #[test]
    fn single_year_domain_edges() {
        assert!(QueryWindow::single(MIN_YEAR).is_ok());
        assert!(QueryWindow::single(MAX_YEAR).is_ok());
        assert_eq!(
            QueryWindow::single(1200),
            Err(InvalidQueryWindow::OutOfRange { year: 1200 })
        );
        assert_eq!(
            QueryWindow::single(699),
            Err(InvalidQueryWindow::OutOfRange { year: 699 })
        );
    }

    #[test]
    fn range_validation() {
        assert!(QueryWindow::new(700, 1100).is_ok());
        assert!(QueryWindow::new(800, 800).is_ok());
        assert_eq!(
            QueryWindow::new(900, 800),
            Err(InvalidQueryWindow::Reversed { start: 900, end: 800 })
        );
        assert_eq!(
            QueryWindow::new(600, 800),
            Err(InvalidQueryWindow::RangeOutOfBounds { start: 600, end: 800 })
        );
        assert!(matches!(
            QueryWindow::new(1000, 1101),
            Err(InvalidQueryWindow::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn out_of_domain_wins_over_reversed() {
        assert!(matches!(
            QueryWindow::new(1200, 800),
            Err(InvalidQueryWindow::RangeOutOfBounds { .. })
        ));
    }

    #[test]
    fn parse_range() {
        let w: QueryWindow = "700-799".parse().unwrap();
        assert_eq!(w, QueryWindow::new(700, 799).unwrap());
        let w: QueryWindow = " 750 - 760 ".parse().unwrap();
        assert_eq!(w.to_string(), "750-760");
    }

    #[test]
    fn parse_range_bad_format() {
        for input in [
            "800", "800-", "-800", "abc-def", "700-800-900", "700--800", "-700-800", "",
        ] {
            assert!(
                matches!(
                    input.parse::<QueryWindow>(),
                    Err(InvalidQueryWindow::BadFormat { .. })
                ),
                "{input:?}"
            );
        }
    }

    #[test]
    fn parse_range_reversed() {
        assert_eq!(
            "900-800".parse::<QueryWindow>(),
            Err(InvalidQueryWindow::Reversed { start: 900, end: 800 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            InvalidQueryWindow::OutOfRange { year: 1200 }.to_string(),
            "Year must be between 700 and 1100."
        );
        assert_eq!(
            InvalidQueryWindow::Reversed { start: 2, end: 1 }.to_string(),
            "Start year cannot be after end year in the range."
        );
    }
}
