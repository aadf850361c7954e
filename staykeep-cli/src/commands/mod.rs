//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Initialize the data directory and database
//! - `rooms`: List rooms in the inventory
//! - `add_room`, `update_room`, `delete_room`: Inventory management
//! - `book`: Create a booking
//! - `modify`: Change a booking's dates or contact details
//! - `cancel`: Cancel a booking by confirmation code
//! - `list`: List every room with its bookings
//! - `check`: Probe availability for a date range
//! - `quote`: Price a stay without booking it

pub mod add_room;
pub mod book;
pub mod cancel;
pub mod check;
pub mod delete_room;
pub mod init;
pub mod list;
pub mod modify;
pub mod quote;
pub mod rooms;
pub mod update_room;

pub use add_room::AddRoomCommand;
pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use check::CheckCommand;
pub use delete_room::DeleteRoomCommand;
pub use init::InitCommand;
pub use list::ListCommand;
pub use modify::ModifyCommand;
pub use quote::QuoteCommand;
pub use rooms::RoomsCommand;
pub use update_room::UpdateRoomCommand;
