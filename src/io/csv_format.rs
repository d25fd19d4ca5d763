//! CSV format handling for booking requests and booking results
//!
//! This module centralizes all CSV format concerns, providing:
//! - RequestRecord structure for deserialization
//! - Conversion from CSV records to domain booking requests
//! - Booking result serialization
//!
//! Conversion functions are pure (no I/O) for easy testing.

use crate::types::{BookingError, BookingOutcome, SeatType};
use serde::Deserialize;
use std::io::Write;

/// Columns written for every booking result
pub const RESULT_HEADER: [&str; 6] = ["booking_id", "name", "status", "bogey", "seat", "berth"];

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: name, preference.
/// The preference may be empty or missing for "no preference".
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RequestRecord {
    pub name: String,
    #[serde(default)]
    pub preference: Option<String>,
}

/// A single passenger booking request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub name: String,
    pub preference: Option<SeatType>,
}

/// Convert a RequestRecord to a BookingRequest
///
/// Any non-empty preference is accepted as a seat type tag, so custom
/// layouts (e.g. `VIP`) can be requested by name.
pub fn convert_request_record(record: RequestRecord) -> BookingRequest {
    BookingRequest {
        name: record.name.trim().to_string(),
        preference: record.preference.as_deref().and_then(SeatType::new),
    }
}

/// Stream booking outcomes as CSV
///
/// Writes the header on creation, then one row per outcome. Waitlisted
/// outcomes leave the seat columns empty.
pub struct ResultWriter<'w> {
    writer: csv::Writer<&'w mut dyn Write>,
}

impl<'w> ResultWriter<'w> {
    pub fn new(output: &'w mut dyn Write) -> Result<Self, BookingError> {
        let mut writer = csv::Writer::from_writer(output);
        writer.write_record(RESULT_HEADER)?;
        Ok(ResultWriter { writer })
    }

    pub fn write(&mut self, outcome: &BookingOutcome) -> Result<(), BookingError> {
        match outcome {
            BookingOutcome::Confirmed(ticket) => {
                let bogey = ticket.bogey_no.to_string();
                let seat = ticket.seat_no.to_string();
                self.writer.write_record([
                    ticket.booking_id.as_str(),
                    ticket.passenger.as_str(),
                    "CONFIRMED",
                    bogey.as_str(),
                    seat.as_str(),
                    ticket.seat_type.as_str(),
                ])?
            }
            BookingOutcome::Waitlisted {
                booking_id,
                passenger,
            } => self.writer.write_record([
                booking_id.as_str(),
                passenger.as_str(),
                "WAITLIST",
                "",
                "",
                "",
            ])?,
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<(), BookingError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookingId, Seat, Ticket};
    use rstest::rstest;

    #[rstest]
    #[case::standard(Some("LB"), Some(SeatType::LOWER_BERTH))]
    #[case::padded(Some(" SU "), Some(SeatType::SIDE_UPPER))]
    #[case::custom(Some("VIP"), SeatType::new("VIP"))]
    #[case::empty(Some(""), None)]
    #[case::missing(None, None)]
    fn test_convert_request_record(
        #[case] preference: Option<&str>,
        #[case] expected: Option<SeatType>,
    ) {
        let record = RequestRecord {
            name: " Asha ".to_string(),
            preference: preference.map(|s| s.to_string()),
        };

        let request = convert_request_record(record);
        assert_eq!(request.name, "Asha");
        assert_eq!(request.preference, expected);
    }

    #[test]
    fn test_write_results() {
        let seat = Seat::new(3, 1, SeatType::UPPER_BERTH);
        let confirmed = BookingOutcome::Confirmed(Ticket::new(
            BookingId::from_sequence(1),
            "Asha",
            &seat,
        ));
        let waitlisted = BookingOutcome::Waitlisted {
            booking_id: BookingId::from_sequence(2),
            passenger: "Ravi".to_string(),
        };

        let mut output = Vec::new();
        let mut writer = ResultWriter::new(&mut output).unwrap();
        writer.write(&confirmed).unwrap();
        writer.write(&waitlisted).unwrap();
        writer.finish().unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "booking_id,name,status,bogey,seat,berth\n\
             BOOK-001,Asha,CONFIRMED,1,3,UB\n\
             BOOK-002,Ravi,WAITLIST,,,\n"
        );
    }

    #[test]
    fn test_header_written_without_results() {
        let mut output = Vec::new();
        ResultWriter::new(&mut output).unwrap().finish().unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "booking_id,name,status,bogey,seat,berth\n"
        );
    }
}
