//! End-to-end integration tests
//!
//! These tests validate the complete batch booking pipeline using
//! predefined CSV test fixtures. Each test:
//! 1. Reads input.csv from a fixture directory
//! 2. Books every request through a fresh booking desk
//! 3. Writes the result CSV to a temporary file
//! 4. Compares actual output with expected.csv
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Preferred seats with fallback until the train is full
//! - Custom seat types in the bogey pattern
//! - Requests without a preference
//! - Malformed rows that are skipped

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::io::{Cursor, Write};
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;
    use train_booking_engine::session::{create_session, SessionMode};
    use train_booking_engine::{BookingDesk, SeatPattern, TrainConfig};

    /// Run a fixture by booking input.csv and comparing with expected.csv
    ///
    /// # Arguments
    ///
    /// * `fixture_name` - Name of the fixture directory (e.g., "no_preference")
    /// * `bogeys` - Number of bogeys in the train
    /// * `pattern` - Comma-separated seat pattern per bogey
    fn run_test_fixture(fixture_name: &str, bogeys: u32, pattern: &str) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let pattern: SeatPattern = pattern.parse().expect("Invalid fixture pattern");
        let config = TrainConfig::new("Fixture Train", "A → B", bogeys, pattern)
            .expect("Invalid fixture train");
        let mut desk = BookingDesk::from_config(&config);
        let session = create_session(SessionMode::Batch(PathBuf::from(&input_path)), config);

        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");
        session
            .run(&mut desk, &mut Cursor::new(""), &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to book requests: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        let actual_output = fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e));
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("two_bogey_scenario", 2, "LB,MB,UB,LB,MB,UB,SL,SU")]
    #[case("custom_pattern", 2, "VIP,LB,UB")]
    #[case("no_preference", 1, "LB,MB,UB,LB,MB,UB,SL,SU")]
    #[case("malformed_rows", 1, "LB,MB,UB,LB,MB,UB,SL,SU")]
    fn test_fixtures(#[case] fixture: &str, #[case] bogeys: u32, #[case] pattern: &str) {
        run_test_fixture(fixture, bogeys, pattern);
    }
}
