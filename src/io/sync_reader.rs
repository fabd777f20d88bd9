//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over raw order rows from a CSV file.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read records one at a time and pairs each
//! record with the header names to build a [`RawRow`]. Field values are kept
//! exactly as read; trimming and validation belong to the row processor.
//!
//! ```no_run
//! use orders_report::io::sync_reader::SyncReader;
//! use std::path::Path;
//!
//! let reader = SyncReader::new(Path::new("orders.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(row) => println!("Read row: {:?}", row),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Failure to open the file or read its header is returned from `new()`
//! - A record the CSV layer cannot read (e.g. invalid UTF-8) is yielded as an
//!   Err; callers treat it as fatal
//! - Malformed field values are not errors here; they surface later as row
//!   rejections

use crate::types::{RawRow, ReportError};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Synchronous CSV reader
///
/// Yields one [`RawRow`] per data record in file order. Memory usage is
/// constant per record.
#[derive(Debug)]
pub struct SyncReader<R: Read = File> {
    reader: csv::Reader<R>,
    headers: Vec<String>,
    record: StringRecord,
}

impl SyncReader<File> {
    /// Open a CSV file for streaming iteration
    ///
    /// # Errors
    ///
    /// * `FileNotFound` if the path does not exist
    /// * `IoError` if the file cannot be opened for another reason
    /// * `CsvError` if the header row cannot be read
    pub fn new(path: &Path) -> Result<Self, ReportError> {
        let file = File::open(path).map_err(|e| ReportError::open_failed(path, e))?;
        Self::from_reader(file)
    }
}

impl<R: Read> SyncReader<R> {
    /// Create a SyncReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - Treat the first row as the header
    /// - Allow flexible field counts (short rows leave trailing columns absent)
    /// - Keep whitespace (values are echoed back verbatim in failed rows)
    pub fn from_reader(reader: R) -> Result<Self, ReportError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        Ok(Self {
            reader,
            headers,
            record: StringRecord::new(),
        })
    }

    /// Column names from the header row
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

impl<R: Read> Iterator for SyncReader<R> {
    type Item = Result<RawRow, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(Ok(RawRow::from_record(
                self.headers.iter().map(String::as_str),
                self.record.iter(),
            ))),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}
