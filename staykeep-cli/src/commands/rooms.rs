//! Rooms command implementation.
//!
//! This module implements the `rooms` command, which lists the room
//! inventory in table or JSON format.

use std::io::Write;

use clap::{Args, ValueEnum};

use staykeep::{Database, Room};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// List rooms in the inventory.
#[derive(Args)]
pub struct RoomsCommand {
    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "table",
        env = "STAYKEEP_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,

    /// Only show rooms of this type
    #[arg(long, value_name = "TYPE")]
    pub filter_type: Option<String>,
}

/// Output format for inventory listings.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl RoomsCommand {
    /// Execute the rooms command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let mut rooms = Database::list_rooms(db.connection()).map_err(CliError::from)?;

        if let Some(ref filter) = self.filter_type {
            let wanted = filter
                .parse::<staykeep::RoomType>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            rooms.retain(|r| r.room_type == wanted);
        }

        match self.format {
            OutputFormat::Table => format_as_table(&rooms)?,
            OutputFormat::Json => format_as_json(&rooms)?,
        }

        Ok(())
    }
}

/// Format rooms as a human-readable table.
fn format_as_table(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle, "ID\tTYPE\tRATE")?;
    for room in rooms {
        writeln!(
            handle,
            "{}\t{}\t{}",
            room.id,
            room.room_type,
            room.nightly_rate
        )?;
    }

    Ok(())
}

/// Format rooms as JSON.
fn format_as_json(rooms: &[Room]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, rooms)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;

    Ok(())
}
