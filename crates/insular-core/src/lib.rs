//! Insular Core - manuscript report engine
//!
//! Loads a hand-compiled CSV of Insular manuscripts, keeps those produced in
//! Britain whose production window overlaps a query window, and reports how
//! many are illustrated.

pub mod aggregate;
pub mod diagnostics;
pub mod error;
pub mod loader;
pub mod logging;
pub mod record;
pub mod report;
pub mod schema;
pub mod window;

// Re-exports for convenience
pub use aggregate::{ReportResult, TARGET_REGION, Tally, aggregate, analyze, matches};
pub use diagnostics::{
    Diagnostics, LogDiagnostics, NoDiagnostics, SkipCounter, SkipCounts, SkipReason,
};
pub use error::SourceError;
pub use loader::{ManuscriptSource, Records};
pub use logging::init_logging;
pub use record::ManuscriptRecord;
pub use report::{OutputFormat, render};
pub use schema::{ColumnSchema, MANUSCRIPT_SCHEMA};
pub use window::{InvalidQueryWindow, MAX_YEAR, MIN_YEAR, QueryWindow};
