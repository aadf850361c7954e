//! Environment variable handling for configuration overrides.
//!
//! This module provides support for STAYKEEP_* environment variables
//! that override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use crate::RoomType;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use staykeep::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads the STAYKEEP_* variables and applies them with higher
    /// precedence than file-based values. `STAYKEEP_DATA_DIR` is
    /// handled by the database layer, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable value is invalid.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // STAYKEEP_ROOM_TYPE_PRIORITY (comma-separated type names)
        if let Ok(priority) = env::var("STAYKEEP_ROOM_TYPE_PRIORITY") {
            config.room_type_priority = Some(Self::parse_priority(&priority)?);
        }

        // STAYKEEP_CODE_ATTEMPTS
        if let Ok(attempts) = env::var("STAYKEEP_CODE_ATTEMPTS") {
            config.code_attempts = Some(attempts.parse().map_err(|_| Error::Validation {
                field: "STAYKEEP_CODE_ATTEMPTS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        // STAYKEEP_BUSY_TIMEOUT_MS
        if let Ok(timeout) = env::var("STAYKEEP_BUSY_TIMEOUT_MS") {
            config.busy_timeout_ms = Some(timeout.parse().map_err(|_| Error::Validation {
                field: "STAYKEEP_BUSY_TIMEOUT_MS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        // STAYKEEP_OUTPUT_FORMAT
        if let Ok(format) = env::var("STAYKEEP_OUTPUT_FORMAT") {
            config.output_format = Some(match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                other => {
                    return Err(Error::Validation {
                        field: "STAYKEEP_OUTPUT_FORMAT".into(),
                        message: format!("Unknown output format: '{other}' (expected table/json)"),
                    })
                }
            });
        }

        Ok(())
    }

    /// Parse a comma-separated room type priority list.
    fn parse_priority(s: &str) -> Result<Vec<RoomType>> {
        let mut types = Vec::new();
        for part in s.split(',') {
            let room_type = part.parse::<RoomType>().map_err(|e| Error::Validation {
                field: "STAYKEEP_ROOM_TYPE_PRIORITY".into(),
                message: e.to_string(),
            })?;
            types.push(room_type);
        }
        Ok(types)
    }
}
