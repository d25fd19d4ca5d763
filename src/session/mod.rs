//! Session module for booking front ends
//!
//! This module defines the Strategy pattern for a complete booking session.
//! Each session drives a [`BookingDesk`] from some source of booking requests
//! and writes its results, so the front end can be selected at runtime.

use crate::config::TrainConfig;
use crate::core::BookingDesk;
use crate::types::BookingError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub mod batch;
pub mod interactive;

pub use batch::BatchSession;
pub use interactive::InteractiveSession;

/// Front end selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMode {
    /// Menu-driven terminal session
    Interactive,
    /// Book every request in a CSV file
    Batch(PathBuf),
}

/// A complete booking session over one desk
pub trait Session {
    /// Run the session to completion
    ///
    /// # Arguments
    ///
    /// * `desk` - The booking desk for the train
    /// * `input` - Interactive input (unused by sessions with their own source)
    /// * `output` - Where menus, tickets or result rows are written
    ///
    /// # Errors
    ///
    /// Returns an error only for fatal conditions (unreadable request file,
    /// failed writes). A full train is never an error at this level; it is
    /// reported as a waitlist outcome.
    fn run(
        &self,
        desk: &mut BookingDesk,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), BookingError>;
}

/// Create the session for `mode`
///
/// `train` supplies the name and route shown by the interactive menu.
pub fn create_session(mode: SessionMode, train: TrainConfig) -> Box<dyn Session> {
    match mode {
        SessionMode::Interactive => Box::new(InteractiveSession::new(train)),
        SessionMode::Batch(path) => Box::new(BatchSession::new(path)),
    }
}
