//! Console presentation
//!
//! Menu text, prompts and ticket rendering for the interactive session. All
//! functions write to a generic `Write` and read from a generic `BufRead`, so
//! they can be driven by a terminal or by an in-memory buffer in tests.

use crate::config::TrainConfig;
use crate::types::{SeatType, Ticket};
use std::io::{self, BufRead, Write};

const RULE: &str = "========================================";
const THIN_RULE: &str = "----------------------------------------";

/// Map a seat-preference menu choice to a seat type
///
/// `1`..`5` select LB, MB, UB, SL and SU; anything else (including `6`,
/// "No Preference") means no preference.
pub fn preference_from_choice(choice: &str) -> Option<SeatType> {
    match choice.trim() {
        "1" => Some(SeatType::LOWER_BERTH),
        "2" => Some(SeatType::MIDDLE_BERTH),
        "3" => Some(SeatType::UPPER_BERTH),
        "4" => Some(SeatType::SIDE_LOWER),
        "5" => Some(SeatType::SIDE_UPPER),
        _ => None,
    }
}

/// Read one trimmed line, or `None` at end of input
pub fn read_line(input: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Print `label` without a newline and flush so it shows before input
pub fn prompt(output: &mut dyn Write, label: &str) -> io::Result<()> {
    write!(output, "{}", label)?;
    output.flush()
}

pub fn write_main_menu(output: &mut dyn Write, train: &TrainConfig) -> io::Result<()> {
    writeln!(output, "{}", RULE)?;
    writeln!(output, "    TRAIN BOOKING SYSTEM - CLI")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "Train : {}", train.name)?;
    writeln!(output, "Route : {}", train.route)?;
    writeln!(output, "{}", THIN_RULE)?;
    writeln!(output, "1. Book Ticket")?;
    writeln!(output, "2. View Seat Matrix")?;
    writeln!(output, "3. Exit")?;
    writeln!(output)
}

pub fn write_booking_header(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "\n{}", THIN_RULE)?;
    writeln!(output, "            BOOK TICKET")?;
    writeln!(output, "{}", THIN_RULE)
}

pub fn write_preference_menu(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "\nSeat Preference:")?;
    writeln!(output, "1. Lower Berth (LB)")?;
    writeln!(output, "2. Middle Berth (MB)")?;
    writeln!(output, "3. Upper Berth (UB)")?;
    writeln!(output, "4. Side Lower (SL)")?;
    writeln!(output, "5. Side Upper (SU)")?;
    writeln!(output, "6. No Preference")
}

pub fn write_ticket(output: &mut dyn Write, ticket: &Ticket) -> io::Result<()> {
    writeln!(output, "\n{}", RULE)?;
    writeln!(output, "          TICKET CONFIRMED 🎉")?;
    writeln!(output, "{}", RULE)?;
    writeln!(output, "Booking ID : {}", ticket.booking_id)?;
    writeln!(output, "Passenger  : {}", ticket.passenger)?;
    writeln!(output, "Bogey No   : {}", ticket.bogey_no)?;
    writeln!(output, "Seat No    : {}", ticket.seat_no)?;
    writeln!(output, "Berth Type : {}", ticket.seat_type)?;
    writeln!(output, "{}", RULE)
}

pub fn write_waitlist(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "\n❌ Train is FULL")?;
    writeln!(output, "Booking Status : WAITLIST")
}

pub fn write_invalid_choice(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "\nInvalid choice. Please try again.")
}

pub fn write_goodbye(output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "\nThank you for using Train Booking CLI 🚆")?;
    writeln!(output, "Goodbye!")
}

/// Print the "press Enter" notice and wait for a line
///
/// Returns `false` if input ended instead.
pub fn wait_for_enter(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<bool> {
    writeln!(output, "\nPress Enter to return to Main Menu...")?;
    output.flush()?;
    Ok(read_line(input)?.is_some())
}
