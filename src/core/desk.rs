//! Booking desk
//!
//! This module provides the BookingDesk that runs a booking session for one
//! train by coordinating the seat inventory, the booking-ID generator and the
//! list of confirmed bookings.
//!
//! Each call to [`BookingDesk::book`] performs the full single-passenger flow:
//! - Draw the next booking ID (a waitlisted request still consumes one)
//! - Allocate a seat through the booking wrapper
//! - Link the allocated seat to the passenger
//! - Keep the confirmed booking for the rest of the session

use crate::config::TrainConfig;
use crate::core::booking_id::BookingIdGenerator;
use crate::core::inventory::SeatInventory;
use crate::types::{Booking, BookingError, BookingId, BookingOutcome, Passenger, SeatType, Ticket};

/// Session-scoped booking orchestrator for a single train
#[derive(Debug)]
pub struct BookingDesk {
    inventory: SeatInventory,
    booking_ids: BookingIdGenerator,
    bookings: Vec<Booking>,
}

impl BookingDesk {
    /// Create a desk over an existing inventory
    pub fn new(inventory: SeatInventory) -> Self {
        BookingDesk {
            inventory,
            booking_ids: BookingIdGenerator::new(),
            bookings: Vec::new(),
        }
    }

    /// Create a desk with a fresh inventory laid out by `config`
    pub fn from_config(config: &TrainConfig) -> Self {
        Self::new(SeatInventory::new(config.total_bogeys, config.pattern.clone()))
    }

    /// Book a seat for a single passenger
    ///
    /// # Arguments
    ///
    /// * `name` - Passenger name
    /// * `preferred` - Preferred seat type, or `None` for no preference
    ///
    /// # Returns
    ///
    /// * `Ok(Ticket)` - The confirmed seat
    /// * `Err(BookingError::NoSeatAvailable)` - The train is full; the
    ///   request is waitlisted
    pub fn book(
        &mut self,
        name: &str,
        preferred: Option<SeatType>,
    ) -> Result<Ticket, BookingError> {
        let booking_id = self.booking_ids.next_id();
        self.book_with_id(booking_id, name, preferred)
    }

    /// Book a seat, reporting a full train as a waitlist outcome
    ///
    /// Same flow as [`BookingDesk::book`], but the waitlisted booking ID is
    /// handed back to the caller instead of being dropped with the error.
    ///
    /// # Errors
    ///
    /// Only `NoSeatAvailable` becomes a waitlist outcome; any other error is
    /// returned unchanged.
    pub fn request(
        &mut self,
        name: &str,
        preferred: Option<SeatType>,
    ) -> Result<BookingOutcome, BookingError> {
        let booking_id = self.booking_ids.next_id();
        match self.book_with_id(booking_id.clone(), name, preferred) {
            Ok(ticket) => Ok(BookingOutcome::Confirmed(ticket)),
            Err(BookingError::NoSeatAvailable { .. }) => Ok(BookingOutcome::Waitlisted {
                booking_id,
                passenger: name.to_string(),
            }),
            Err(e) => Err(e),
        }
    }

    fn book_with_id(
        &mut self,
        booking_id: BookingId,
        name: &str,
        preferred: Option<SeatType>,
    ) -> Result<Ticket, BookingError> {
        let mut booking = Booking::new(
            booking_id.clone(),
            vec![Passenger::new(name, preferred.clone())],
        );

        let seat = match booking.allocate_seat(&mut self.inventory, preferred.as_ref()) {
            Ok(seat) => seat,
            Err(e @ BookingError::NoSeatAvailable { .. }) => {
                tracing::warn!(%booking_id, passenger = name, "train is full, booking waitlisted");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let ticket = Ticket::new(booking_id, name, seat);
        booking.passengers[0].assign_seat(seat);
        self.bookings.push(booking);

        tracing::info!(
            booking_id = %ticket.booking_id,
            passenger = name,
            bogey_no = ticket.bogey_no,
            seat_no = ticket.seat_no,
            seat_type = %ticket.seat_type,
            "ticket confirmed"
        );

        Ok(ticket)
    }

    /// Confirmed bookings in the order they were made
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Look up a confirmed booking by ID
    pub fn find_booking(&self, booking_id: &BookingId) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|booking| booking.booking_id == *booking_id)
    }

    pub fn inventory(&self) -> &SeatInventory {
        &self.inventory
    }
}
