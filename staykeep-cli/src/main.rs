//! Main entry point for the staykeep CLI.
//!
//! This is the command-line interface for the staykeep booking system.
//! It provides commands for managing room inventory and bookings:
//! - `init`: Initialize the data directory and database
//! - `rooms` / `add-room` / `update-room` / `delete-room`: Inventory
//! - `book` / `modify` / `cancel`: Booking lifecycle
//! - `list` / `check` / `quote`: Availability and pricing

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;

use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = staykeep::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Rooms(cmd) => cmd.execute(&global),
        cli::Command::AddRoom(cmd) => cmd.execute(&global),
        cli::Command::UpdateRoom(cmd) => cmd.execute(&global),
        cli::Command::DeleteRoom(cmd) => cmd.execute(&global),
        cli::Command::Book(cmd) => cmd.execute(&global),
        cli::Command::Modify(cmd) => cmd.execute(&global),
        cli::Command::Cancel(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Quote(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
