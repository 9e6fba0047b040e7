//! Region + window filter and illustrated-share aggregation

use serde::Serialize;

use crate::diagnostics::Diagnostics;
use crate::error::SourceError;
use crate::loader::ManuscriptSource;
use crate::record::ManuscriptRecord;
use crate::window::QueryWindow;

/// Broad production place counted by the report (exact, case-sensitive)
pub const TARGET_REGION: &str = "Britain";

/// Totals for one query window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportResult {
    total_matched: u64,
    illustrated_count: u64,
    percentage_illustrated: f64,
}

impl ReportResult {
    /// Clamps `illustrated_count` to `total_matched`.
    pub fn new(total_matched: u64, illustrated_count: u64) -> Self {
        let illustrated_count = illustrated_count.min(total_matched);
        let percentage_illustrated = if total_matched > 0 {
            illustrated_count as f64 / total_matched as f64 * 100.0
        } else {
            0.0
        };
        Self {
            total_matched,
            illustrated_count,
            percentage_illustrated,
        }
    }

    pub fn total_matched(&self) -> u64 {
        self.total_matched
    }

    pub fn illustrated_count(&self) -> u64 {
        self.illustrated_count
    }

    pub fn percentage_illustrated(&self) -> f64 {
        self.percentage_illustrated
    }
}

/// Does `record` count towards `window`?
pub fn matches(record: &ManuscriptRecord, window: &QueryWindow) -> bool {
    record.place_broad == TARGET_REGION
        && record.overlaps(window.year_start(), window.year_end())
}

/// Running counters
#[derive(Debug, Clone, Copy, Default)]
pub struct Tally {
    total: u64,
    illustrated: u64,
}

impl Tally {
    pub fn observe(&mut self, record: &ManuscriptRecord, window: &QueryWindow) {
        if !matches(record, window) {
            return;
        }
        self.total += 1;
        if record.is_illustrated {
            self.illustrated += 1;
        }
    }

    pub fn finish(self) -> ReportResult {
        ReportResult::new(self.total, self.illustrated)
    }
}

/// Filter and count already-parsed records
pub fn aggregate<I>(records: I, window: &QueryWindow) -> ReportResult
where
    I: IntoIterator<Item = ManuscriptRecord>,
{
    let mut tally = Tally::default();
    for record in records {
        tally.observe(&record, window);
    }
    tally.finish()
}

/// Stream every record of `source` through the filter.
///
/// Stops at the first I/O error; no partial result is returned.
pub fn analyze<R, D>(
    source: ManuscriptSource<R>,
    window: &QueryWindow,
    diagnostics: D,
) -> Result<ReportResult, SourceError>
where
    R: std::io::Read,
    D: Diagnostics,
{
    let mut tally = Tally::default();
    let mut records = source.records(diagnostics);
    for record in records.by_ref() {
        tally.observe(&record?, window);
    }
    let result = tally.finish();
    log::debug!(
        "Read {} rows, {} matched {TARGET_REGION} {window}",
        records.rows_read(),
        result.total_matched()
    );
    Ok(result)
}
