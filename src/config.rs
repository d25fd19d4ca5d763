//! Train configuration
//!
//! Describes the one train served by a booking session: its display name,
//! route and seat layout.

use crate::types::{BookingError, SeatNo, SeatPattern};

/// Default number of bogeys in the reference train
pub const DEFAULT_TOTAL_BOGEYS: u32 = 9;

/// Largest number of seats a train may hold
pub const MAX_TOTAL_SEATS: usize = 1_000_000;

const _: () = assert!(MAX_TOTAL_SEATS <= SeatNo::MAX as usize);

/// Default train name shown in the main menu
pub const DEFAULT_TRAIN_NAME: &str = "SJ-101 - San Jose Express";

/// Default route shown in the main menu
pub const DEFAULT_ROUTE: &str = "SAN JOSE → SAN FRANCISCO";

/// Layout and display details of a single train
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainConfig {
    pub name: String,
    pub route: String,
    pub total_bogeys: u32,
    pub pattern: SeatPattern,
}

impl TrainConfig {
    /// Create a validated train configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `total_bogeys` is zero
    /// - `pattern` is empty
    /// - the layout holds more than [`MAX_TOTAL_SEATS`] seats
    pub fn new(
        name: impl Into<String>,
        route: impl Into<String>,
        total_bogeys: u32,
        pattern: SeatPattern,
    ) -> Result<Self, BookingError> {
        if total_bogeys == 0 {
            return Err(BookingError::invalid_bogey_count(total_bogeys));
        }
        if pattern.is_empty() {
            return Err(BookingError::invalid_pattern("pattern is empty"));
        }

        let seats_per_bogey = pattern.seats_per_bogey();
        match (total_bogeys as usize).checked_mul(seats_per_bogey) {
            Some(total_seats) if total_seats <= MAX_TOTAL_SEATS => {}
            _ => {
                return Err(BookingError::train_too_large(
                    total_bogeys,
                    seats_per_bogey,
                    MAX_TOTAL_SEATS,
                ))
            }
        }

        Ok(TrainConfig {
            name: name.into(),
            route: route.into(),
            total_bogeys,
            pattern,
        })
    }

    pub fn total_seats(&self) -> usize {
        self.total_bogeys as usize * self.pattern.seats_per_bogey()
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            name: DEFAULT_TRAIN_NAME.to_string(),
            route: DEFAULT_ROUTE.to_string(),
            total_bogeys: DEFAULT_TOTAL_BOGEYS,
            pattern: SeatPattern::default(),
        }
    }
}
