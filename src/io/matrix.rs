//! Seat matrix rendering
//!
//! Draws the bogey × seat-type occupancy grid: one row per bogey, one column
//! per pattern position, `0` for an available seat and `1` for a booked one.
//! The header comes from the inventory's own pattern.

use crate::core::SeatInventory;
use std::io::{self, Write};

/// Write the seat matrix for `inventory`
pub fn write_seat_matrix(output: &mut dyn Write, inventory: &SeatInventory) -> io::Result<()> {
    writeln!(output, "\n----------------------------------------")?;
    writeln!(output, "           SEAT MATRIX VIEW")?;
    writeln!(output, "----------------------------------------")?;

    write!(output, "SeatType : ")?;
    for seat_type in inventory.pattern().iter() {
        write!(output, "{:<3} ", seat_type.as_str())?;
    }
    writeln!(output)?;
    writeln!(output, "----------------------------------------")?;

    for (bogey_no, seats) in inventory.bogeys() {
        write!(output, "Bogey {:<2} : ", bogey_no)?;
        for seat in seats {
            write!(output, "{}   ", if seat.is_booked() { '1' } else { '0' })?;
        }
        writeln!(output)?;
    }

    writeln!(output, "----------------------------------------")?;
    writeln!(output, "Legend: 0 = AVAILABLE | 1 = BOOKED")
}
