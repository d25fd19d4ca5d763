//! Interactive menu session
//!
//! Loops over the main menu until the user exits or input ends:
//! - `1` books a ticket for one passenger
//! - `2` shows the seat matrix
//! - `3` exits
//!
//! A full train is shown as a waitlist status and the session carries on.

use crate::config::TrainConfig;
use crate::core::BookingDesk;
use crate::io::console;
use crate::io::matrix::write_seat_matrix;
use crate::session::Session;
use crate::types::BookingError;
use std::io::{BufRead, Write};

/// What the main loop does after handling a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven terminal session
#[derive(Debug, Clone)]
pub struct InteractiveSession {
    train: TrainConfig,
}

impl InteractiveSession {
    pub fn new(train: TrainConfig) -> Self {
        InteractiveSession { train }
    }

    fn handle_booking(
        &self,
        desk: &mut BookingDesk,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Flow, BookingError> {
        console::write_booking_header(output)?;

        console::prompt(output, "Passenger Name: ")?;
        let Some(name) = console::read_line(input)? else {
            return Ok(Flow::Exit);
        };

        console::write_preference_menu(output)?;
        console::prompt(output, "Enter choice: ")?;
        let Some(choice) = console::read_line(input)? else {
            return Ok(Flow::Exit);
        };
        let preferred = console::preference_from_choice(&choice);

        match desk.book(&name, preferred) {
            Ok(ticket) => console::write_ticket(output, &ticket)?,
            Err(BookingError::NoSeatAvailable { .. }) => console::write_waitlist(output)?,
            Err(e) => return Err(e),
        }

        Ok(wait(input, output)?)
    }

    fn handle_matrix(
        &self,
        desk: &BookingDesk,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<Flow, BookingError> {
        write_seat_matrix(output, desk.inventory())?;
        Ok(wait(input, output)?)
    }
}

fn wait(input: &mut dyn BufRead, output: &mut dyn Write) -> std::io::Result<Flow> {
    if console::wait_for_enter(input, output)? {
        Ok(Flow::Continue)
    } else {
        Ok(Flow::Exit)
    }
}

impl Session for InteractiveSession {
    fn run(
        &self,
        desk: &mut BookingDesk,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<(), BookingError> {
        loop {
            console::write_main_menu(output, &self.train)?;
            console::prompt(output, "Enter choice: ")?;

            let Some(choice) = console::read_line(input)? else {
                tracing::debug!("input closed, ending session");
                break;
            };

            let flow = match choice.as_str() {
                "1" => self.handle_booking(desk, input, output)?,
                "2" => self.handle_matrix(desk, input, output)?,
                "3" => {
                    console::write_goodbye(output)?;
                    Flow::Exit
                }
                _ => {
                    console::write_invalid_choice(output)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        output.flush()?;
        Ok(())
    }
}
