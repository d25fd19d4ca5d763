//! Logging setup
//!
//! Uses `tracing` with a `tracing-subscriber` formatter. Logs go to stderr so
//! stdout only carries the menu, tickets and CSV results.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "warn";

/// Initialize the global subscriber
///
/// # Environment
///
/// - `RUST_LOG`: log filter, e.g. `RUST_LOG=debug` or
///   `RUST_LOG=train_booking_engine::core=trace` (default: `warn`)
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}
