use crate::config::{TrainConfig, DEFAULT_ROUTE, DEFAULT_TOTAL_BOGEYS, DEFAULT_TRAIN_NAME};
use crate::session::SessionMode;
use crate::types::{BookingError, SeatPattern};
use clap::Parser;
use std::path::PathBuf;

/// Book seats on a single sleeper train
#[derive(Parser, Debug)]
#[command(name = "train-booking")]
#[command(about = "Book seats on a single sleeper train", long_about = None)]
pub struct CliArgs {
    /// Optional CSV file of booking requests (batch mode)
    #[arg(
        value_name = "REQUESTS",
        help = "CSV file with `name,preference` rows; omit for the interactive menu"
    )]
    pub requests: Option<PathBuf>,

    /// Number of bogeys in the train
    #[arg(
        long = "bogeys",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOTAL_BOGEYS,
        help = "Number of bogeys in the train (default: 9)"
    )]
    pub bogeys: u32,

    /// Per-bogey seat layout
    #[arg(
        long = "pattern",
        value_name = "TYPES",
        help = "Comma-separated seat types per bogey (default: LB,MB,UB,LB,MB,UB,SL,SU)"
    )]
    pub pattern: Option<String>,

    /// Train name shown in the menu
    #[arg(long = "train-name", value_name = "NAME", default_value = DEFAULT_TRAIN_NAME)]
    pub train_name: String,

    /// Route shown in the menu
    #[arg(long = "route", value_name = "ROUTE", default_value = DEFAULT_ROUTE)]
    pub route: String,
}

impl CliArgs {
    /// Build a validated TrainConfig from CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern contains an empty seat type or the
    /// bogey count is zero.
    pub fn to_train_config(&self) -> Result<TrainConfig, BookingError> {
        let pattern = match &self.pattern {
            Some(pattern) => pattern.parse::<SeatPattern>()?,
            None => SeatPattern::default(),
        };

        TrainConfig::new(&self.train_name, &self.route, self.bogeys, pattern)
    }

    /// Batch mode when a requests file was given, interactive otherwise
    pub fn session_mode(&self) -> SessionMode {
        match &self.requests {
            Some(path) => SessionMode::Batch(path.clone()),
            None => SessionMode::Interactive,
        }
    }
}
