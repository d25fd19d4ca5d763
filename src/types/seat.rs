//! Seat-related types for the Train Booking Engine
//!
//! This module defines the seat type tag, the seat record and the per-bogey
//! seat pattern used to build a train's inventory.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use super::error::BookingError;

/// Seat number, unique across one train (1-indexed)
pub type SeatNo = u32;

/// Bogey (carriage) number (1-indexed)
pub type BogeyNo = u32;

/// Seat type tag (e.g. `LB`, `MB`, `UB`, `SL`, `SU`)
///
/// Seat types are open-ended: a pattern may introduce any tag, such as
/// `VIP`, next to the five well-known berth types exposed as constants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatType(Cow<'static, str>);

impl SeatType {
    /// Lower Berth
    pub const LOWER_BERTH: SeatType = SeatType(Cow::Borrowed("LB"));
    /// Middle Berth
    pub const MIDDLE_BERTH: SeatType = SeatType(Cow::Borrowed("MB"));
    /// Upper Berth
    pub const UPPER_BERTH: SeatType = SeatType(Cow::Borrowed("UB"));
    /// Side Lower
    pub const SIDE_LOWER: SeatType = SeatType(Cow::Borrowed("SL"));
    /// Side Upper
    pub const SIDE_UPPER: SeatType = SeatType(Cow::Borrowed("SU"));

    /// Create a custom seat type tag
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for an empty tag,
    /// since an empty tag means "no preference" rather than a seat type.
    pub fn new(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            None
        } else {
            Some(SeatType(Cow::Owned(tag.to_string())))
        }
    }

    /// The tag as written in the pattern
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single seat in the train
///
/// Seats are created once when the inventory is built and mutated in place
/// by the allocator. The booked flag only ever goes from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    /// Seat number, assigned in construction order starting at 1
    pub seat_no: SeatNo,

    /// Bogey this seat belongs to, starting at 1
    pub bogey_no: BogeyNo,

    /// Seat type taken from the bogey pattern
    pub seat_type: SeatType,

    is_booked: bool,
}

impl Seat {
    /// Create a new, unbooked seat
    pub fn new(seat_no: SeatNo, bogey_no: BogeyNo, seat_type: SeatType) -> Self {
        Seat {
            seat_no,
            bogey_no,
            seat_type,
            is_booked: false,
        }
    }

    /// Whether the seat has been allocated to a passenger
    pub fn is_booked(&self) -> bool {
        self.is_booked
    }

    /// Whether the seat can still be allocated
    pub fn is_available(&self) -> bool {
        !self.is_booked
    }

    pub(crate) fn mark_booked(&mut self) {
        self.is_booked = true;
    }
}

/// Ordered per-bogey seat layout
///
/// The pattern is repeated once per bogey. Types may repeat within the
/// pattern; no deduplication is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPattern(Vec<SeatType>);

impl SeatPattern {
    pub fn new(seat_types: Vec<SeatType>) -> Self {
        SeatPattern(seat_types)
    }

    /// Number of seats in every bogey
    pub fn seats_per_bogey(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SeatType> {
        self.0.iter()
    }
}

impl Default for SeatPattern {
    /// Sleeper layout: `LB, MB, UB, LB, MB, UB, SL, SU`
    fn default() -> Self {
        SeatPattern(vec![
            SeatType::LOWER_BERTH,
            SeatType::MIDDLE_BERTH,
            SeatType::UPPER_BERTH,
            SeatType::LOWER_BERTH,
            SeatType::MIDDLE_BERTH,
            SeatType::UPPER_BERTH,
            SeatType::SIDE_LOWER,
            SeatType::SIDE_UPPER,
        ])
    }
}

impl FromStr for SeatPattern {
    type Err = BookingError;

    /// Parse a comma-separated pattern such as `LB,MB,UB,SL,SU`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seat_types = s
            .split(',')
            .enumerate()
            .map(|(position, tag)| {
                SeatType::new(tag).ok_or_else(|| {
                    BookingError::invalid_pattern(&format!(
                        "empty seat type at position {}",
                        position + 1
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SeatPattern(seat_types))
    }
}

impl fmt::Display for SeatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tags: Vec<&str> = self.0.iter().map(SeatType::as_str).collect();
        f.write_str(&tags.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower("LB", SeatType::LOWER_BERTH)]
    #[case::side_upper("SU", SeatType::SIDE_UPPER)]
    #[case::trimmed("  MB ", SeatType::MIDDLE_BERTH)]
    fn test_well_known_tags_compare_equal(#[case] tag: &str, #[case] expected: SeatType) {
        assert_eq!(SeatType::new(tag), Some(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn test_empty_tag_is_no_seat_type(#[case] tag: &str) {
        assert_eq!(SeatType::new(tag), None);
    }

    #[test]
    fn test_custom_tag_is_accepted() {
        let vip = SeatType::new("VIP").unwrap();
        assert_eq!(vip.as_str(), "VIP");
        assert_ne!(vip, SeatType::LOWER_BERTH);
    }

    #[test]
    fn test_new_seat_is_available() {
        let mut seat = Seat::new(1, 1, SeatType::LOWER_BERTH);
        assert!(seat.is_available());

        seat.mark_booked();
        assert!(seat.is_booked());
        assert!(!seat.is_available());
    }

    #[test]
    fn test_default_pattern_layout() {
        let pattern = SeatPattern::default();
        assert_eq!(pattern.seats_per_bogey(), 8);
        assert_eq!(pattern.to_string(), "LB,MB,UB,LB,MB,UB,SL,SU");
    }

    #[rstest]
    #[case::standard("LB,MB,UB", 3)]
    #[case::with_spaces("LB, MB , VIP", 3)]
    #[case::duplicates("LB,LB,LB,LB", 4)]
    #[case::single("SU", 1)]
    fn test_parse_pattern(#[case] input: &str, #[case] expected_len: usize) {
        let pattern: SeatPattern = input.parse().unwrap();
        assert_eq!(pattern.seats_per_bogey(), expected_len);
    }

    #[rstest]
    #[case::empty("")]
    #[case::trailing_comma("LB,MB,")]
    #[case::gap("LB,,UB")]
    fn test_parse_pattern_rejects_empty_tags(#[case] input: &str) {
        let result = input.parse::<SeatPattern>();
        assert!(matches!(result, Err(BookingError::InvalidPattern { .. })));
    }
}
