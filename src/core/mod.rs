//! Core business logic module
//!
//! This module contains the seat reservation components:
//! - `inventory` - Seat list construction and occupancy queries
//! - `allocator` - Preferred-type seat allocation with fallback
//! - `booking` - Booking wrapper delegating to the allocator
//! - `booking_id` - Sequential booking-ID generation
//! - `desk` - Session orchestration for one train

pub mod allocator;
pub mod booking;
pub mod booking_id;
pub mod desk;
pub mod inventory;

pub use allocator::allocate;
pub use booking_id::BookingIdGenerator;
pub use desk::BookingDesk;
pub use inventory::{initialize_seats, SeatInventory};
