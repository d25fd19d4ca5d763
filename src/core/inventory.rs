//! Seat inventory module
//!
//! This module provides the `SeatInventory` struct which owns every seat of a
//! single train together with the pattern the seats were built from.
//!
//! The SeatInventory is responsible for:
//! - Materializing the seat list from a bogey count and a seat pattern
//! - Answering occupancy queries (available, booked, full)
//! - Exposing per-bogey slices for the seat matrix view
//! - Delegating allocation to the allocator

use crate::config::MAX_TOTAL_SEATS;
use crate::core::allocator;
use crate::types::{BogeyNo, BookingError, Seat, SeatNo, SeatPattern, SeatType};

/// Build the seat list for a train
///
/// For every bogey from 1 to `total_bogeys`, one seat is emitted per pattern
/// entry, in pattern order. Seat numbers form a running count starting at 1.
/// Zero bogeys or an empty pattern produce an empty list.
///
/// Seat numbers never wrap: a layout with more than `SeatNo::MAX` seats is
/// cut off at the last representable seat. `TrainConfig::new` rejects such
/// layouts long before that point.
pub fn initialize_seats(total_bogeys: u32, pattern: &SeatPattern) -> Vec<Seat> {
    let capacity = (total_bogeys as usize)
        .saturating_mul(pattern.seats_per_bogey())
        .min(MAX_TOTAL_SEATS);
    let layout = (1..=total_bogeys)
        .flat_map(|bogey_no| pattern.iter().map(move |seat_type| (bogey_no, seat_type)));

    let mut seats = Vec::with_capacity(capacity);
    seats.extend(
        (1..=SeatNo::MAX)
            .zip(layout)
            .map(|(seat_no, (bogey_no, seat_type))| {
                Seat::new(seat_no, bogey_no, seat_type.clone())
            }),
    );

    seats
}

/// All seats of one train
///
/// The pattern is stored on the instance; building a new inventory never
/// affects any other inventory.
#[derive(Debug, Clone)]
pub struct SeatInventory {
    pattern: SeatPattern,
    total_bogeys: u32,
    seats: Vec<Seat>,
}

impl SeatInventory {
    /// Create an inventory of `total_bogeys` bogeys laid out by `pattern`
    pub fn new(total_bogeys: u32, pattern: SeatPattern) -> Self {
        let seats = initialize_seats(total_bogeys, &pattern);
        tracing::debug!(
            total_bogeys,
            seats_per_bogey = pattern.seats_per_bogey(),
            total_seats = seats.len(),
            "seat inventory initialized"
        );

        SeatInventory {
            pattern,
            total_bogeys,
            seats,
        }
    }

    /// Allocate one seat, preferring `preferred` when given
    ///
    /// See [`allocator::allocate`] for the selection rules.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::NoSeatAvailable` when every seat is booked.
    pub fn allocate(&mut self, preferred: Option<&SeatType>) -> Result<&Seat, BookingError> {
        allocator::allocate(&mut self.seats, preferred)
    }

    /// All seats in ascending seat-number order
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Look up a seat by its number
    pub fn seat(&self, seat_no: SeatNo) -> Option<&Seat> {
        // Seat numbers are dense and start at 1
        let index = (seat_no as usize).checked_sub(1)?;
        self.seats.get(index)
    }

    /// Seats of every bogey, in bogey order
    ///
    /// Yields `(bogey_no, seats)` pairs. Nothing is yielded for an empty
    /// pattern.
    pub fn bogeys(&self) -> impl Iterator<Item = (BogeyNo, &[Seat])> {
        let width = self.pattern.seats_per_bogey().max(1);
        self.seats
            .chunks(width)
            .zip(1..)
            .map(|(seats, bogey_no)| (bogey_no, seats))
    }

    pub fn pattern(&self) -> &SeatPattern {
        &self.pattern
    }

    pub fn total_bogeys(&self) -> u32 {
        self.total_bogeys
    }

    pub fn seats_per_bogey(&self) -> usize {
        self.pattern.seats_per_bogey()
    }

    pub fn total_seats(&self) -> usize {
        self.seats.len()
    }

    pub fn available_count(&self) -> usize {
        self.seats.iter().filter(|seat| seat.is_available()).count()
    }

    pub fn booked_count(&self) -> usize {
        self.total_seats() - self.available_count()
    }

    /// True once no seat is left to allocate
    pub fn is_full(&self) -> bool {
        self.seats.iter().all(Seat::is_booked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_train_has_72_seats() {
        let seats = initialize_seats(9, &SeatPattern::default());
        assert_eq!(seats.len(), 72);

        assert_eq!(seats[0], Seat::new(1, 1, SeatType::LOWER_BERTH));
        assert_eq!(seats[8], Seat::new(9, 2, SeatType::LOWER_BERTH));
        assert_eq!(seats[71], Seat::new(72, 9, SeatType::SIDE_UPPER));
    }

    #[test]
    fn test_seat_numbers_are_sequential_and_unbooked() {
        let seats = initialize_seats(3, &SeatPattern::default());

        for (index, seat) in seats.iter().enumerate() {
            assert_eq!(seat.seat_no as usize, index + 1);
            assert_eq!(seat.bogey_no as usize, index / 8 + 1);
            assert!(seat.is_available());
        }
    }

    #[test]
    fn test_seat_numbers_follow_bogey_order_across_custom_pattern() {
        let seats = initialize_seats(4, &"VIP,LB,UB".parse().unwrap());

        let numbered: Vec<(SeatNo, BogeyNo)> =
            seats.iter().map(|seat| (seat.seat_no, seat.bogey_no)).collect();
        let expected: Vec<(SeatNo, BogeyNo)> =
            (1..=12).map(|seat_no| (seat_no, (seat_no - 1) / 3 + 1)).collect();
        assert_eq!(numbered, expected);
    }

    #[rstest]
    #[case::no_bogeys(0, SeatPattern::default())]
    #[case::empty_pattern(4, SeatPattern::new(Vec::new()))]
    fn test_empty_inventory(#[case] bogeys: u32, #[case] pattern: SeatPattern) {
        let inventory = SeatInventory::new(bogeys, pattern);
        assert_eq!(inventory.total_seats(), 0);
        assert_eq!(inventory.bogeys().count(), 0);
        assert!(inventory.is_full());
    }

    #[test]
    fn test_custom_pattern_does_not_leak_into_other_inventories() {
        let custom: SeatPattern = "VIP,LB".parse().unwrap();
        let custom_inventory = SeatInventory::new(2, custom);
        let default_inventory = SeatInventory::new(2, SeatPattern::default());

        assert_eq!(custom_inventory.total_seats(), 4);
        assert_eq!(default_inventory.total_seats(), 16);
        assert_eq!(default_inventory.pattern(), &SeatPattern::default());
    }

    #[test]
    fn test_pattern_types_are_not_deduplicated() {
        let pattern: SeatPattern = "LB,LB,LB".parse().unwrap();
        let inventory = SeatInventory::new(1, pattern);

        assert_eq!(inventory.total_seats(), 3);
        assert!(inventory
            .seats()
            .iter()
            .all(|seat| seat.seat_type == SeatType::LOWER_BERTH));
    }

    #[rstest]
    #[case::first(1, Some(1))]
    #[case::second_bogey(9, Some(2))]
    #[case::last(16, Some(2))]
    #[case::zero(0, None)]
    #[case::past_end(17, None)]
    fn test_seat_lookup(#[case] seat_no: SeatNo, #[case] bogey: Option<BogeyNo>) {
        let inventory = SeatInventory::new(2, SeatPattern::default());
        assert_eq!(inventory.seat(seat_no).map(|seat| seat.bogey_no), bogey);
    }

    #[test]
    fn test_bogeys_yield_pattern_sized_rows() {
        let inventory = SeatInventory::new(3, SeatPattern::default());
        let rows: Vec<_> = inventory.bogeys().collect();

        assert_eq!(rows.len(), 3);
        for (bogey_no, seats) in rows {
            assert_eq!(seats.len(), 8);
            assert!(seats.iter().all(|seat| seat.bogey_no == bogey_no));
        }
    }

    #[test]
    fn test_occupancy_counts_follow_allocations() {
        let mut inventory = SeatInventory::new(1, SeatPattern::default());
        assert_eq!(inventory.available_count(), 8);
        assert_eq!(inventory.booked_count(), 0);

        inventory.allocate(Some(&SeatType::UPPER_BERTH)).unwrap();
        inventory.allocate(None).unwrap();

        assert_eq!(inventory.available_count(), 6);
        assert_eq!(inventory.booked_count(), 2);
        assert!(!inventory.is_full());
    }
}
