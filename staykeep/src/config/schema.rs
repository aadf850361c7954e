//! Configuration schema definitions.
//!
//! This module defines the configuration structure for staykeep: room
//! type priority, booking code generation, database tuning, and output
//! format defaults.

use serde::{Deserialize, Serialize};

use crate::operations::DEFAULT_CODE_ATTEMPTS;
use crate::RoomType;

/// Default busy timeout for database connections, in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Complete configuration structure.
///
/// Every field is optional; unset fields fall back to built-in
/// defaults through the `effective_*` accessors.
///
/// # Examples
///
/// ```
/// use staykeep::config::Config;
/// use staykeep::RoomType;
///
/// let config = Config {
///     code_attempts: Some(32),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_code_attempts(), 32);
/// assert_eq!(config.effective_room_type_priority()[0], RoomType::Single);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Room type priority used when no type is requested.
    pub room_type_priority: Option<Vec<RoomType>>,

    /// Booking code generation attempts before giving up.
    pub code_attempts: Option<u32>,

    /// Database busy timeout in milliseconds.
    pub busy_timeout_ms: Option<u64>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Room type priority, falling back to the built-in order.
    #[must_use]
    pub fn effective_room_type_priority(&self) -> Vec<RoomType> {
        self.room_type_priority
            .clone()
            .unwrap_or_else(|| RoomType::PRIORITY_ORDER.to_vec())
    }

    /// Code generation attempt limit, falling back to the default.
    #[must_use]
    pub fn effective_code_attempts(&self) -> u32 {
        self.code_attempts.unwrap_or(DEFAULT_CODE_ATTEMPTS)
    }

    /// Database busy timeout, falling back to the default.
    #[must_use]
    pub fn effective_busy_timeout_ms(&self) -> u64 {
        self.busy_timeout_ms.unwrap_or(DEFAULT_BUSY_TIMEOUT_MS)
    }

    /// Output format, falling back to the table format.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Merges another config over this one.
    ///
    /// Fields set in `other` win; unset fields keep this config's value.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            room_type_priority: other.room_type_priority.or(self.room_type_priority),
            code_attempts: other.code_attempts.or(self.code_attempts),
            busy_timeout_ms: other.busy_timeout_ms.or(self.busy_timeout_ms),
            output_format: other.output_format.or(self.output_format),
        }
    }
}

/// Output format for list commands.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table output.
    #[default]
    Table,
    /// JSON output.
    Json,
}
