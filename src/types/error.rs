//! Error types for the Train Booking Engine
//!
//! This module defines all error types that can occur while configuring a
//! train, allocating seats and reading batch booking requests.
//!
//! # Error Categories
//!
//! - **Allocation Errors**: the train is full
//! - **Configuration Errors**: invalid seat pattern or bogey count
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed booking request rows

use thiserror::Error;

/// Main error type for the booking engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    /// Every seat in the train is booked
    ///
    /// This is the only way an allocation can fail. It is an expected
    /// outcome, shown to the user as a waitlist status.
    #[error("No seat available: all {total_seats} seats are booked")]
    NoSeatAvailable {
        /// Number of seats in the train
        total_seats: usize,
    },

    /// The seat pattern could not be used to build an inventory
    #[error("Invalid seat pattern: {message}")]
    InvalidPattern {
        /// Description of the problem
        message: String,
    },

    /// A train needs at least one bogey
    #[error("Invalid bogey count {bogeys}: a train needs at least one bogey")]
    InvalidBogeyCount {
        /// The rejected bogey count
        bogeys: u32,
    },

    /// The layout has more seats than a train may hold
    #[error("Train too large: {bogeys} bogeys of {seats_per_bogey} seats exceed the limit of {max_seats} seats")]
    TrainTooLarge {
        /// The rejected bogey count
        bogeys: u32,
        /// Seats in every bogey
        seats_per_bogey: usize,
        /// Largest accepted seat count
        max_seats: usize,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// This is a recoverable error - the malformed request is skipped
    /// and processing continues with the next one.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for BookingError {
    fn from(error: std::io::Error) -> Self {
        BookingError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BookingError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BookingError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl BookingError {
    /// Create a NoSeatAvailable error
    pub fn no_seat_available(total_seats: usize) -> Self {
        BookingError::NoSeatAvailable { total_seats }
    }

    /// Create an InvalidPattern error
    pub fn invalid_pattern(message: &str) -> Self {
        BookingError::InvalidPattern {
            message: message.to_string(),
        }
    }

    /// Create an InvalidBogeyCount error
    pub fn invalid_bogey_count(bogeys: u32) -> Self {
        BookingError::InvalidBogeyCount { bogeys }
    }

    /// Create a TrainTooLarge error
    pub fn train_too_large(bogeys: u32, seats_per_bogey: usize, max_seats: usize) -> Self {
        BookingError::TrainTooLarge {
            bogeys,
            seats_per_bogey,
            max_seats,
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        BookingError::FileNotFound {
            path: path.to_string(),
        }
    }
}
