//! I/O module
//!
//! Handles terminal presentation and CSV batch input/output.
//!
//! # Components
//!
//! - `console` - Menu, prompt and ticket rendering for the interactive session
//! - `matrix` - Seat occupancy grid rendering
//! - `csv_format` - Request record conversion and outcome serialization
//! - `request_reader` - Booking request reader with iterator interface

pub mod console;
pub mod csv_format;
pub mod matrix;
pub mod request_reader;

pub use csv_format::{BookingRequest, ResultWriter};
pub use matrix::write_seat_matrix;
pub use request_reader::RequestReader;
