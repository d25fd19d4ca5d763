//! Booking operations
//!
//! A booking is a thin wrapper over the allocator. Seat allocation and
//! passenger linking are two explicit steps:
//!
//! 1. [`Booking::allocate_seat`] asks the inventory for a seat. The seat is
//!    marked as booked; passenger records are not touched.
//! 2. The caller links the returned seat with [`Passenger::assign_seat`].
//!
//! [`Passenger::assign_seat`]: crate::types::Passenger::assign_seat

use crate::core::SeatInventory;
use crate::types::{Booking, BookingError, BookingId, Passenger, Seat, SeatType};

impl Booking {
    pub fn new(booking_id: BookingId, passengers: Vec<Passenger>) -> Self {
        Booking {
            booking_id,
            passengers,
        }
    }

    /// Allocate a seat for one of this booking's passengers
    ///
    /// Delegates directly to the inventory's allocator.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::NoSeatAvailable` if the train is full.
    pub fn allocate_seat<'a>(
        &self,
        inventory: &'a mut SeatInventory,
        preferred: Option<&SeatType>,
    ) -> Result<&'a Seat, BookingError> {
        inventory.allocate(preferred)
    }

    /// True once every passenger on the booking holds a seat
    pub fn is_confirmed(&self) -> bool {
        !self.passengers.is_empty()
            && self
                .passengers
                .iter()
                .all(|passenger| passenger.allocated_seat.is_some())
    }
}
