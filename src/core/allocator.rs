//! Seat allocation
//!
//! Picks exactly one seat per call from a flat seat list:
//!
//! 1. **Preferred pass**: the first unbooked seat of the preferred type.
//! 2. **Fallback pass**: the first unbooked seat of any other type. With no
//!    preference every unbooked seat qualifies.
//! 3. Otherwise the train is full and `NoSeatAvailable` is returned.
//!
//! Both passes scan in ascending seat-number order, so the lowest eligible
//! seat always wins. On success exactly one seat flips to booked; on failure
//! the seats are left untouched.

use crate::types::{BookingError, Seat, SeatType};

/// Allocate one seat from `seats`, honouring `preferred` when possible
///
/// # Arguments
///
/// * `seats` - Seats in ascending seat-number order
/// * `preferred` - Preferred seat type, or `None` for no preference
///
/// # Returns
///
/// * `Ok(&Seat)` - The seat that was just marked as booked
/// * `Err(BookingError::NoSeatAvailable)` - If every seat is already booked
pub fn allocate<'a>(
    seats: &'a mut [Seat],
    preferred: Option<&SeatType>,
) -> Result<&'a Seat, BookingError> {
    let index = match find_preferred(seats, preferred) {
        Some(index) => index,
        None => {
            if let Some(seat_type) = preferred {
                tracing::debug!(%seat_type, "preferred seat type unavailable, falling back");
            }
            find_fallback(seats, preferred)
                .ok_or_else(|| BookingError::no_seat_available(seats.len()))?
        }
    };

    let seat = &mut seats[index];
    seat.mark_booked();
    tracing::debug!(
        seat_no = seat.seat_no,
        bogey_no = seat.bogey_no,
        seat_type = %seat.seat_type,
        "seat allocated"
    );

    Ok(&*seat)
}

fn find_preferred(seats: &[Seat], preferred: Option<&SeatType>) -> Option<usize> {
    let preferred = preferred?;
    seats
        .iter()
        .position(|seat| seat.is_available() && seat.seat_type == *preferred)
}

fn find_fallback(seats: &[Seat], preferred: Option<&SeatType>) -> Option<usize> {
    seats
        .iter()
        .position(|seat| seat.is_available() && Some(&seat.seat_type) != preferred)
}
