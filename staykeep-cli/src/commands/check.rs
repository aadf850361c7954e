//! Check command implementation.
//!
//! This module implements the `check` command, an availability probe.
//! With `--type` it reports whether a room of that type is free for
//! the whole range; without it, it reports the default type the
//! priority order would offer, which falls back to the first inventory
//! type when everything is booked. A failed typed probe is a semantic
//! failure (exit code 1) so the command composes in scripts.

use clap::Args;

use staykeep::availability::{default_room_type, find_free_room};
use staykeep::RoomType;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_interval, GlobalOptions};

/// Probe availability for a date range.
#[derive(Args)]
pub struct CheckCommand {
    /// Room type to probe; omit to ask for the default type
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: Option<String>,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_out: String,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let interval = parse_interval(&self.check_in, &self.check_out)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        match self.room_type {
            Some(ref name) => {
                let room_type = name
                    .parse::<RoomType>()
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

                let room = find_free_room(db.connection(), &room_type, &interval)
                    .map_err(CliError::from)?;
                match room {
                    Some(room) => {
                        // The room the booking flow would assign
                        println!("{}", room.id);
                        if !global.quiet {
                            eprintln!("{room_type} is available for {interval} (room {})", room.id);
                        }
                        Ok(())
                    }
                    None => Err(CliError::SemanticFailure(format!(
                        "no {room_type} room is free for {interval}"
                    ))),
                }
            }
            None => {
                let priority = config.effective_room_type_priority();
                let chosen = default_room_type(db.connection(), &priority, &interval)
                    .map_err(CliError::from)?;
                match chosen {
                    Some(room_type) => {
                        println!("{room_type}");
                        Ok(())
                    }
                    None => Err(CliError::SemanticFailure(
                        "the inventory has no rooms".into(),
                    )),
                }
            }
        }
    }
}
