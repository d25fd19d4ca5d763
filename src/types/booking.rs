//! Booking-related types for the Train Booking Engine
//!
//! This module defines passengers, bookings and the ticket handed back to a
//! caller once a seat has been confirmed.

use std::fmt;

use super::seat::{BogeyNo, Seat, SeatNo, SeatType};

/// Booking identifier, formatted as `BOOK-001`, `BOOK-002`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingId(String);

impl BookingId {
    /// Build the identifier for a sequence number
    ///
    /// Sequence numbers are zero-padded to three digits; larger numbers
    /// simply widen the identifier (`BOOK-1000`).
    pub fn from_sequence(sequence: u64) -> Self {
        BookingId(format!("BOOK-{:03}", sequence))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A passenger on a booking
///
/// The allocated seat is recorded by seat number. Seat data stays owned by
/// the inventory; the passenger only remembers which seat was granted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    pub name: String,

    /// Preferred seat type, `None` when the passenger has no preference
    pub preferred_seat: Option<SeatType>,

    /// Seat granted to this passenger, if any
    pub allocated_seat: Option<SeatNo>,
}

impl Passenger {
    pub fn new(name: impl Into<String>, preferred_seat: Option<SeatType>) -> Self {
        Passenger {
            name: name.into(),
            preferred_seat,
            allocated_seat: None,
        }
    }

    /// Link an allocated seat to this passenger
    ///
    /// This is the second step of a booking: the allocator marks the seat as
    /// booked and returns it, the caller records it on the passenger.
    pub fn assign_seat(&mut self, seat: &Seat) {
        self.allocated_seat = Some(seat.seat_no);
    }
}

/// A booking holding one or more passengers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub passengers: Vec<Passenger>,
}

/// Confirmation returned for a successfully booked passenger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub booking_id: BookingId,
    pub passenger: String,
    pub bogey_no: BogeyNo,
    pub seat_no: SeatNo,
    pub seat_type: SeatType,
}

impl Ticket {
    pub fn new(booking_id: BookingId, passenger: impl Into<String>, seat: &Seat) -> Self {
        Ticket {
            booking_id,
            passenger: passenger.into(),
            bogey_no: seat.bogey_no,
            seat_no: seat.seat_no,
            seat_type: seat.seat_type.clone(),
        }
    }
}

/// Outcome of a single booking request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// A seat was allocated
    Confirmed(Ticket),
    /// The train was full; the booking ID was still consumed
    Waitlisted { booking_id: BookingId, passenger: String },
}

impl BookingOutcome {
    pub fn booking_id(&self) -> &BookingId {
        match self {
            BookingOutcome::Confirmed(ticket) => &ticket.booking_id,
            BookingOutcome::Waitlisted { booking_id, .. } => booking_id,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::first(1, "BOOK-001")]
    #[case::two_digits(42, "BOOK-042")]
    #[case::three_digits(999, "BOOK-999")]
    #[case::widens(1000, "BOOK-1000")]
    fn test_booking_id_format(#[case] sequence: u64, #[case] expected: &str) {
        assert_eq!(BookingId::from_sequence(sequence).to_string(), expected);
    }

    #[test]
    fn test_assign_seat_records_seat_number() {
        let mut passenger = Passenger::new("Asha", Some(SeatType::LOWER_BERTH));
        assert_eq!(passenger.allocated_seat, None);

        let seat = Seat::new(12, 2, SeatType::LOWER_BERTH);
        passenger.assign_seat(&seat);

        assert_eq!(passenger.allocated_seat, Some(12));
    }

    #[test]
    fn test_ticket_copies_seat_details() {
        let seat = Seat::new(7, 1, SeatType::SIDE_LOWER);
        let ticket = Ticket::new(BookingId::from_sequence(3), "Ravi", &seat);

        assert_eq!(ticket.booking_id.as_str(), "BOOK-003");
        assert_eq!(ticket.passenger, "Ravi");
        assert_eq!(ticket.bogey_no, 1);
        assert_eq!(ticket.seat_no, 7);
        assert_eq!(ticket.seat_type, SeatType::SIDE_LOWER);
    }
}
