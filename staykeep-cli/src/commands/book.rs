//! Book command implementation.
//!
//! This module implements the `book` command, which creates a booking
//! and prints the confirmation code to stdout.

use clap::Args;

use staykeep::operations::{BookOptions, BookPlan};
use staykeep::{Guest, RoomType};

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_interval, print_dry_run, GlobalOptions,
};

/// Create a booking.
#[derive(Args)]
pub struct BookCommand {
    /// Room type (single, double, deluxe, suite, or a custom name)
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// Check-in date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_in: String,

    /// Check-out date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub check_out: String,

    /// Guest first name
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Guest surname
    #[arg(long, value_name = "SURNAME")]
    pub surname: String,

    /// Contact email
    #[arg(long, value_name = "EMAIL")]
    pub email: String,

    /// Contact phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let interval = parse_interval(&self.check_in, &self.check_out)?;
        let guest = Guest::new(&self.name, &self.surname, &self.email, &self.phone)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let options = BookOptions::new(room_type, interval, guest)
            .with_code_attempts(config.effective_code_attempts());

        if self.dry_run {
            let plan = BookPlan::new(options).build_plan(&mut db).map_err(CliError::from)?;
            print_dry_run(&plan, global.quiet);
            return Ok(());
        }

        // create_booking handles the lost-race retry; the plan/execute
        // split is only surfaced for dry runs.
        let booking =
            staykeep::create_booking(&mut db, options).map_err(CliError::from)?;

        // Just the confirmation code on stdout (shell-friendly)
        println!("{}", booking.code);

        if !global.quiet {
            eprintln!(
                "Booked room {} for {} ({} {})",
                booking.room_id,
                booking.interval,
                booking.guest.name(),
                booking.guest.surname()
            );
        }

        Ok(())
    }
}
