//! Quote command implementation.

use std::io::Write;

use clap::Args;

use staykeep::{price_quote, RoomType};

use crate::commands::rooms::OutputFormat;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_interval, GlobalOptions};

/// Price a stay without booking it.
#[derive(Args)]
pub struct QuoteCommand {
    /// Room type (single, double, deluxe, suite, or a custom name)
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_out: String,

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

impl QuoteCommand {
    /// Execute the quote command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let interval = parse_interval(&self.check_in, &self.check_out)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let quote = price_quote(&db, &room_type, &interval).map_err(CliError::from)?;

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Table => {
                writeln!(
                    handle,
                    "{} nights in room {} ({}) at {} per night: {}",
                    quote.nights, quote.room_id, quote.room_type, quote.nightly_rate, quote.total
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &quote)
                    .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}
