//! Batch booking session
//!
//! Books every request in a CSV file, in file order, and writes one result
//! row per request. The pipeline is:
//! 1. `RequestReader` streams `name,preference` rows
//! 2. `BookingDesk::request` allocates a seat or waitlists the passenger
//! 3. `ResultWriter` writes `CONFIRMED` or `WAITLIST` rows
//!
//! Malformed rows are logged and skipped; they do not consume a booking ID.

use crate::core::BookingDesk;
use crate::io::csv_format::ResultWriter;
use crate::io::request_reader::RequestReader;
use crate::session::Session;
use crate::types::BookingError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Session that books requests read from a CSV file
#[derive(Debug, Clone)]
pub struct BatchSession {
    requests: PathBuf,
}

impl BatchSession {
    pub fn new(requests: PathBuf) -> Self {
        BatchSession { requests }
    }
}

impl Session for BatchSession {
    fn run(
        &self,
        desk: &mut BookingDesk,
        _input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), BookingError> {
        let reader = RequestReader::open(&self.requests)?;
        let mut writer = ResultWriter::new(output)?;

        let mut confirmed = 0usize;
        let mut waitlisted = 0usize;

        for result in reader {
            let request = match result {
                Ok(request) => request,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed booking request");
                    continue;
                }
            };

            let outcome = desk.request(&request.name, request.preference)?;
            if outcome.is_confirmed() {
                confirmed += 1;
            } else {
                waitlisted += 1;
            }

            writer.write(&outcome)?;
        }

        writer.finish()?;
        tracing::info!(
            path = %self.requests.display(),
            confirmed,
            waitlisted,
            "batch booking finished"
        );

        Ok(())
    }
}
