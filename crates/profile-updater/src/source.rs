//! MAC address record source backed by a CSV file.

use crate::error::UpdaterError;
use csv::{ReaderBuilder, StringRecordsIntoIter, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Yields the first field of every CSV record.
///
/// The reader does no header handling of its own; header rows come through
/// like any other record and are filtered by the updater.
pub struct CsvMacSource<R: Read> {
    records: StringRecordsIntoIter<R>,
}

impl CsvMacSource<File> {
    /// Open a CSV file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UpdaterError> {
        let reader = builder().from_path(path)?;
        Ok(Self {
            records: reader.into_records(),
        })
    }
}

impl<R: Read> CsvMacSource<R> {
    /// Read CSV records from any reader.
    pub fn from_reader(reader: R) -> Self {
        Self {
            records: builder().from_reader(reader).into_records(),
        }
    }
}

impl<R: Read> Iterator for CsvMacSource<R> {
    type Item = Result<String, UpdaterError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| {
            record
                .map(|r| r.get(0).unwrap_or_default().to_string())
                .map_err(UpdaterError::from)
        })
    }
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).trim(Trim::All);
    builder
}
