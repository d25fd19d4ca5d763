//! Sequential booking-ID generation
//!
//! IDs come from an owned counter rather than process-wide state, so every
//! booking desk numbers its own bookings and two desks never interfere.

use crate::types::BookingId;

/// Issues `BOOK-001`, `BOOK-002`, ... in order
///
/// The counter starts at 1, advances once per issued ID and is never reset.
#[derive(Debug, Clone)]
pub struct BookingIdGenerator {
    next: u64,
}

impl BookingIdGenerator {
    pub fn new() -> Self {
        BookingIdGenerator { next: 1 }
    }

    /// Issue the next booking ID
    pub fn next_id(&mut self) -> BookingId {
        let id = BookingId::from_sequence(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs issued so far
    pub fn issued(&self) -> u64 {
        self.next - 1
    }
}

impl Default for BookingIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
