//! List command implementation.
//!
//! This module implements the `list` command, which displays every
//! room with its bookings (the occupancy projection) in table or JSON
//! format.

use std::io::Write;

use clap::Args;

use staykeep::availability::{room_availability, RoomAvailability};

use crate::commands::rooms::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// List every room with its bookings.
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "STAYKEEP_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let projection = room_availability(db.connection()).map_err(CliError::from)?;

        match self.format {
            OutputFormat::Table => format_as_table(&projection)?,
            OutputFormat::Json => format_as_json(&projection)?,
        }

        Ok(())
    }
}

/// Format the projection as a human-readable table.
fn format_as_table(projection: &[RoomAvailability]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ROOM\tTYPE\tRATE\tBOOKINGS")?;
    for entry in projection {
        let bookings = if entry.bookings.is_empty() {
            "-".to_string()
        } else {
            entry
                .bookings
                .iter()
                .map(|b| format!("{} {} ({})", b.code, b.interval, b.guest.surname()))
                .collect::<Vec<_>>()
                .join(", ")
        };

        writeln!(
            handle,
            "{}\t{}\t{}\t{}",
            entry.room.id,
            entry.room.room_type,
            entry.room.nightly_rate,
            bookings
        )?;
    }

    Ok(())
}

/// Format the projection as JSON.
fn format_as_json(projection: &[RoomAvailability]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, projection)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}
