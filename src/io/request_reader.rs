//! Booking request reader with iterator interface
//!
//! Streams booking requests from a CSV file with a `name,preference` header.
//! Delegates record conversion to the csv_format module.
//!
//! ```no_run
//! use train_booking_engine::io::request_reader::RequestReader;
//! use std::path::Path;
//!
//! let reader = RequestReader::open(Path::new("requests.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(request) => println!("Booking for {}", request.name),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `open()`
//! - Individual malformed rows are yielded as `Err` items carrying the line
//!   number, so the caller can skip them and continue

use crate::io::csv_format::{convert_request_record, BookingRequest, RequestRecord};
use crate::types::BookingError;
use csv::{DeserializeRecordsIntoIter, ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Streaming reader over booking requests
pub struct RequestReader {
    records: DeserializeRecordsIntoIter<File, RequestRecord>,
}

impl RequestReader {
    /// Open a requests CSV file
    ///
    /// The reader trims whitespace and tolerates a missing trailing
    /// preference column.
    ///
    /// # Errors
    ///
    /// Returns `FileNotFound` if the path does not exist and `IoError` for
    /// any other failure to open it.
    pub fn open(path: &Path) -> Result<Self, BookingError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => BookingError::file_not_found(&path.display().to_string()),
            _ => BookingError::from(e),
        })?;

        let records = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(file)
            .into_deserialize();

        Ok(RequestReader { records })
    }
}

impl Iterator for RequestReader {
    type Item = Result<BookingRequest, BookingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(
            record
                .map(convert_request_record)
                .map_err(BookingError::from),
        )
    }
}
