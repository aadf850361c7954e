//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    AddRoomCommand, BookCommand, CancelCommand, CheckCommand, DeleteRoomCommand, InitCommand,
    ListCommand, ModifyCommand, QuoteCommand, RoomsCommand, UpdateRoomCommand,
};

/// Command-line tool for managing hotel rooms and bookings.
#[derive(Parser)]
#[command(name = "staykeep")]
#[command(version, about = "Manage hotel room inventory and bookings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "STAYKEEP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "STAYKEEP_BUSY_TIMEOUT"
    )]
    pub busy_timeout: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// List rooms in the inventory
    Rooms(RoomsCommand),

    /// Add a room to the inventory
    AddRoom(AddRoomCommand),

    /// Change a room's type or nightly rate
    UpdateRoom(UpdateRoomCommand),

    /// Remove a room and every booking attached to it
    DeleteRoom(DeleteRoomCommand),

    /// Create a booking
    Book(BookCommand),

    /// Change a booking's dates or contact details
    Modify(ModifyCommand),

    /// Cancel a booking by confirmation code
    Cancel(CancelCommand),

    /// List every room with its bookings
    List(ListCommand),

    /// Probe availability for a date range
    Check(CheckCommand),

    /// Price a stay without booking it
    Quote(QuoteCommand),
}
