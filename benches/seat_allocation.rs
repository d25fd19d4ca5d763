//! Benchmark suite for seat allocation
//!
//! Measures filling a whole train through the allocator using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Every benchmark books the train until it is full, so later requests walk
//! the fallback path over a mostly booked seat list.

use train_booking_engine::{BookingDesk, SeatInventory, SeatPattern, SeatType};

fn main() {
    divan::main();
}

/// Fill a train where every passenger asks for the same seat type
#[divan::bench(args = [9, 90, 900])]
fn fill_with_single_preference(bogeys: u32) {
    let mut inventory = SeatInventory::new(bogeys, SeatPattern::default());
    while !inventory.is_full() {
        let seat = inventory
            .allocate(Some(&SeatType::UPPER_BERTH))
            .expect("Allocation failed");
        divan::black_box(seat);
    }
}

/// Fill a train where passengers cycle through the berth types
#[divan::bench(args = [9, 90, 900])]
fn fill_with_mixed_preferences(bogeys: u32) {
    let preferences = [
        Some(SeatType::LOWER_BERTH),
        Some(SeatType::SIDE_LOWER),
        None,
        Some(SeatType::MIDDLE_BERTH),
        Some(SeatType::SIDE_UPPER),
    ];
    let mut inventory = SeatInventory::new(bogeys, SeatPattern::default());
    for preferred in preferences.iter().cycle() {
        if inventory.is_full() {
            break;
        }
        let seat = inventory
            .allocate(preferred.as_ref())
            .expect("Allocation failed");
        divan::black_box(seat);
    }
}

/// Book the reference 9-bogey train through the desk, one request past full
#[divan::bench]
fn desk_requests_reference_train() {
    let mut desk = BookingDesk::new(SeatInventory::new(9, SeatPattern::default()));
    for _ in 0..=72 {
        let outcome = desk
            .request("Passenger", Some(SeatType::LOWER_BERTH))
            .expect("Request failed");
        divan::black_box(outcome);
    }
}
