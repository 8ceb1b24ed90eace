//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over exchange rows from a CSV export.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader keyed by the export's header row. Each data
//! row is padded with empty fields up to the header width and deserialized
//! into a [`SourceRecord`]. Columns the file does not have, and trailing cells
//! a short row leaves out, read as empty strings. Unknown columns are ignored
//! and blank lines are skipped.
//!
//! ```no_run
//! use koinly_export_converter::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("export.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(record) => println!("Read row: {:?}", record),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - A malformed row is yielded as an Err variant carrying its line number;
//!   callers are expected to stop at the first one

use crate::types::{ConvertError, SourceRecord};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Synchronous CSV reader
///
/// Generic over the byte source so the same parsing rules apply to files,
/// stdin and in-memory buffers.
#[derive(Debug)]
pub struct SyncReader<R = File> {
    reader: csv::Reader<R>,
    headers: Option<StringRecord>,
}

impl SyncReader<File> {
    /// Open an export file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(SyncReader)` if the file opened successfully
    /// * `Err(ConvertError::FileNotFound)` if nothing exists at `path`
    /// * `Err(ConvertError::IoError)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, ConvertError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConvertError::file_not_found(&path.display().to_string()),
            _ => ConvertError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> SyncReader<R> {
    /// Wrap any byte source
    ///
    /// The CSV reader is configured to:
    /// - Trim whitespace from headers and fields
    /// - Allow rows shorter or longer than the header
    /// - Use an 8KB buffer for efficient I/O
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            headers: None,
        }
    }

    /// Read every remaining row, stopping at the first malformed one
    pub fn read_all(self) -> Result<Vec<SourceRecord>, ConvertError> {
        self.collect()
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<SourceRecord, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.headers.is_none() {
            match self.reader.headers() {
                Ok(headers) => self.headers = Some(headers.clone()),
                Err(e) => return Some(Err(e.into())),
            }
        }

        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let headers = self.headers.as_ref()?;
                while record.len() < headers.len() {
                    record.push_field("");
                }
                Some(
                    record
                        .deserialize::<SourceRecord>(Some(headers))
                        .map_err(ConvertError::from),
                )
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
