//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `seat`: Seat, seat type and seat pattern types
//! - `booking`: Passenger, booking and ticket types
//! - `error`: Error types for the booking engine

pub mod booking;
pub mod error;
pub mod seat;

pub use booking::{Booking, BookingId, BookingOutcome, Passenger, Ticket};
pub use error::BookingError;
pub use seat::{BogeyNo, Seat, SeatNo, SeatPattern, SeatType};
