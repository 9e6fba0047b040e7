//! Skipped-row diagnostics
//!
//! The loader never fails on a bad row. It reports the row here and moves on.
//! Callers pick a sink: count, log, both, or nothing.

use std::fmt;

/// Why a data row produced no record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    TooFewColumns { found: usize, expected: usize },
    MissingField { column: &'static str },
    InvalidYear { column: &'static str, value: String },
    /// The CSV reader could not decode the row (e.g. invalid UTF-8)
    Unreadable { message: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewColumns { found, expected } => {
                write!(f, "insufficient columns ({found}, need {expected})")
            }
            Self::MissingField { column } => write!(f, "missing {column}"),
            Self::InvalidYear { column, value } => {
                write!(f, "invalid year in {column}: '{value}'")
            }
            Self::Unreadable { message } => write!(f, "unreadable row: {message}"),
        }
    }
}

/// Receives one call per skipped row. `line` is 1-based and counts the header.
pub trait Diagnostics {
    fn row_skipped(&mut self, line: u64, reason: &SkipReason);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDiagnostics;

impl Diagnostics for NoDiagnostics {
    fn row_skipped(&mut self, _line: u64, _reason: &SkipReason) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn row_skipped(&mut self, line: u64, reason: &SkipReason) {
        (**self).row_skipped(line, reason);
    }
}

/// Fan out to two sinks
impl<A: Diagnostics, B: Diagnostics> Diagnostics for (A, B) {
    fn row_skipped(&mut self, line: u64, reason: &SkipReason) {
        self.0.row_skipped(line, reason);
        self.1.row_skipped(line, reason);
    }
}

/// Per-reason skip counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounts {
    pub too_few_columns: usize,
    pub missing_field: usize,
    pub invalid_year: usize,
    pub unreadable: usize,
}

impl SkipCounts {
    pub fn total(&self) -> usize {
        self.too_few_columns + self.missing_field + self.invalid_year + self.unreadable
    }

    /// Log a one-line summary (nothing when no rows were skipped).
    pub fn log(&self) {
        if self.total() == 0 {
            return;
        }
        log::info!(
            "Skipped {} malformed rows ({} short, {} missing fields, {} bad years, {} unreadable)",
            self.total(),
            self.too_few_columns,
            self.missing_field,
            self.invalid_year,
            self.unreadable
        );
    }
}

/// Counts skips by reason
#[derive(Debug, Default)]
pub struct SkipCounter {
    counts: SkipCounts,
}

impl SkipCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> SkipCounts {
        self.counts
    }
}

impl Diagnostics for SkipCounter {
    fn row_skipped(&mut self, _line: u64, reason: &SkipReason) {
        let c = &mut self.counts;
        match reason {
            SkipReason::TooFewColumns { .. } => c.too_few_columns += 1,
            SkipReason::MissingField { .. } => c.missing_field += 1,
            SkipReason::InvalidYear { .. } => c.invalid_year += 1,
            SkipReason::Unreadable { .. } => c.unreadable += 1,
        }
    }
}

/// Logs each skipped row at a fixed level
#[derive(Debug, Clone, Copy)]
pub struct LogDiagnostics {
    level: log::Level,
}

impl LogDiagnostics {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogDiagnostics {
    fn default() -> Self {
        Self::new(log::Level::Debug)
    }
}

impl Diagnostics for LogDiagnostics {
    fn row_skipped(&mut self, line: u64, reason: &SkipReason) {
        log::log!(self.level, "Skipping row {line}: {reason}");
    }
}
