//! Streaming CSV loader
//!
//! Opens the dataset, validates the header width once against
//! [`MANUSCRIPT_SCHEMA`], then yields one [`ManuscriptRecord`] per valid row.
//! Invalid rows are reported to a [`Diagnostics`] sink and skipped.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecordsIntoIter};

use crate::diagnostics::{Diagnostics, SkipReason};
use crate::error::SourceError;
use crate::record::ManuscriptRecord;
use crate::schema::MANUSCRIPT_SCHEMA;

/// Opened dataset with a validated header
pub struct ManuscriptSource<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> std::fmt::Debug for ManuscriptSource<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManuscriptSource").finish_non_exhaustive()
    }
}

impl ManuscriptSource<BufReader<File>> {
    /// Open a dataset file and check its header
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::SourceNotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => SourceError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;
        // Opening a directory succeeds on Unix; reading it does not
        if file.metadata().is_ok_and(|m| m.is_dir()) {
            return Err(SourceError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(ErrorKind::InvalidInput, "is a directory"),
            });
        }
        log::debug!("Opened {}", path.display());
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> ManuscriptSource<R> {
    /// Wrap any reader. Consumes the header row.
    pub fn from_reader(rdr: R) -> Result<Self, SourceError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // row widths vary in hand-compiled data
            .from_reader(rdr);

        // Header contents are ignored; read as bytes so a stray encoding
        // problem there cannot hide the width check.
        let mut header = ByteRecord::new();
        let found = match reader.read_byte_record(&mut header) {
            Ok(true) => header.len(),
            Ok(false) => 0,
            Err(e) => return Err(SourceError::Read(e.into())),
        };

        let expected = MANUSCRIPT_SCHEMA.min_columns();
        if found < expected {
            return Err(SourceError::MalformedSource { expected, found });
        }
        log::debug!("Header has {found} columns (need {expected})");

        Ok(Self { reader })
    }

    /// Lazily parse the remaining rows
    pub fn records<D: Diagnostics>(self, diagnostics: D) -> Records<R, D> {
        Records {
            rows: self.reader.into_records(),
            diagnostics,
            line: 1,
            rows_read: 0,
            failed: false,
        }
    }
}

/// Iterator over valid records.
///
/// Yields `Err` only for I/O failures; iteration ends after the first one.
pub struct Records<R: Read, D> {
    rows: StringRecordsIntoIter<R>,
    diagnostics: D,
    line: u64,
    rows_read: u64,
    failed: bool,
}

impl<R: Read, D> Records<R, D> {
    /// Data rows seen so far, skipped ones included
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }
}

impl<R: Read, D: Diagnostics> Iterator for Records<R, D> {
    type Item = Result<ManuscriptRecord, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let result = self.rows.next()?;
            self.rows_read += 1;
            self.line += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) if e.is_io_error() => {
                    self.failed = true;
                    return Some(Err(SourceError::Read(e.into())));
                }
                Err(e) => {
                    let line = e.position().map_or(self.line, |p| p.line());
                    let reason = SkipReason::Unreadable {
                        message: e.to_string(),
                    };
                    self.diagnostics.row_skipped(line, &reason);
                    continue;
                }
            };

            if let Some(pos) = row.position() {
                self.line = pos.line();
            }

            match ManuscriptRecord::from_row(&row) {
                Ok(record) => return Some(Ok(record)),
                Err(reason) => self.diagnostics.row_skipped(self.line, &reason),
            }
        }
    }
}
