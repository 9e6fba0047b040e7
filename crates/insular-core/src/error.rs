//! Fatal data source errors

use std::path::PathBuf;

/// Error that stops a report before any totals are produced.
///
/// Bad individual rows are not errors; they go to
/// [`Diagnostics`](crate::diagnostics::Diagnostics).
#[derive(Debug)]
pub enum SourceError {
    /// The data file does not exist
    SourceNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The data file exists but cannot be read (permissions, a directory)
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Header row narrower than the schema requires
    MalformedSource { expected: usize, found: usize },
    /// I/O failure while streaming rows
    Read(std::io::Error),
}

impl std::fmt::Display for SourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SourceNotFound { path, .. } => write!(
                f,
                "Data file '{}' not found. \
                 Use 'insular sources' for guidance on where to find manuscript data.",
                path.display()
            ),
            Self::Open { path, source } => {
                write!(f, "Data file '{}' could not be opened: {source}", path.display())
            }
            Self::MalformedSource { expected, found } => write!(
                f,
                "Data file does not appear to have the expected number of columns \
                 (at least {expected}, header has {found})"
            ),
            Self::Read(e) => write!(f, "IO: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceNotFound { source, .. } | Self::Open { source, .. } => Some(source),
            Self::Read(e) => Some(e),
            Self::MalformedSource { .. } => None,
        }
    }
}

impl SourceError {
    /// Missing data file, as opposed to a broken one
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}
