//! Train Booking CLI
//!
//! Command-line interface for booking seats on a single sleeper train.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                          # interactive menu
//! cargo run -- --bogeys 4 --pattern LB,UB,SL,SU      # custom layout
//! cargo run -- requests.csv > bookings.csv           # batch mode
//! RUST_LOG=debug cargo run -- requests.csv           # with allocation logs
//! ```
//!
//! # Sessions
//!
//! - **interactive**: menu-driven booking and seat matrix view (default)
//! - **batch**: books every `name,preference` row of a CSV file and writes
//!   one `CONFIRMED`/`WAITLIST` row per request to stdout
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid layout, requests file not found, I/O failure, etc.)

use std::process;
use train_booking_engine::cli;
use train_booking_engine::core::BookingDesk;
use train_booking_engine::logging;
use train_booking_engine::session;

fn main() {
    logging::init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let config = match args.to_train_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut desk = BookingDesk::from_config(&config);
    let session = session::create_session(args.session_mode(), config);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();
    if let Err(e) = session.run(&mut desk, &mut input, &mut output) {
        tracing::error!(error = %e, "session failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
