//! Train Booking Engine Library
//! # Overview
//!
//! This library provides single-train seat reservation: a fixed seat layout,
//! one-passenger-at-a-time booking against a seat-type preference, and a seat
//! occupancy view.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Seat, SeatType, Passenger, Booking, etc.)
//! - [`config`] - Train layout and display configuration
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::inventory`] - Seat list construction from a per-bogey pattern
//!   - [`core::allocator`] - Preferred-type allocation with fallback
//!   - [`core::booking`] - Booking wrapper over the allocator
//!   - [`core::desk`] - Session orchestration and booking IDs
//! - [`io`] - Console rendering and CSV batch input/output
//! - [`session`] - Interactive and batch front ends
//!
//! # Allocation Rules
//!
//! - The lowest-numbered unbooked seat of the preferred type wins
//! - If that type is exhausted, the lowest-numbered unbooked seat of any
//!   other type is taken
//! - With no preference, the lowest-numbered unbooked seat is taken
//! - When every seat is booked, allocation fails with `NoSeatAvailable` and
//!   the passenger is waitlisted
//!
//! # Seat Layout
//!
//! Each bogey repeats the same seat pattern. The default sleeper pattern is
//! `LB, MB, UB, LB, MB, UB, SL, SU` over 9 bogeys (72 seats). Seat types are
//! open-ended tags, so custom patterns may use any type name.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod session;
pub mod types;

pub use crate::config::TrainConfig;
pub use crate::core::{allocate, initialize_seats, BookingDesk, BookingIdGenerator, SeatInventory};
pub use crate::types::{
    BogeyNo, Booking, BookingError, BookingId, BookingOutcome, Passenger, Seat, SeatNo,
    SeatPattern, SeatType, Ticket,
};
