//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI
//! commands: configuration loading, database management, argument
//! parsing, and plan display.

use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;

use staykeep::operations::OperationPlan;
use staykeep::{Config, ConfigBuilder, Database, DatabaseConfig, StayInterval};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,
}

/// Resolve the data directory from global options.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => staykeep::database::default_data_dir().map_err(CliError::from),
    }
}

/// Load configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (STAYKEEP_*)
/// 2. Configuration file in the data directory
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join("staykeep.db");
    if global.verbose {
        eprintln!("Using database at {}", db_path.display());
    }

    let mut db_config = DatabaseConfig::new(db_path);
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config = db_config.with_busy_timeout(Duration::from_secs(timeout_seconds.into()));
    } else {
        db_config =
            db_config.with_busy_timeout(Duration::from_millis(config.effective_busy_timeout_ms()));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse an ISO calendar date argument.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, CliError> {
    value.parse().map_err(|_| {
        CliError::InvalidArguments(format!("{field}: expected YYYY-MM-DD, got '{value}'"))
    })
}

/// Parse a check-in/check-out pair into a stay interval.
pub fn parse_interval(check_in: &str, check_out: &str) -> Result<StayInterval, CliError> {
    let start = parse_date("check-in", check_in)?;
    let end = parse_date("check-out", check_out)?;
    StayInterval::new(start, end).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Print a plan's actions and warnings to stderr (dry-run display).
pub fn print_dry_run(plan: &OperationPlan, quiet: bool) {
    if quiet {
        return;
    }
    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in plan.actions.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, action.description());
    }
    if !plan.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &plan.warnings {
            eprintln!("  - {warning}");
        }
    }
}

/// Print execution warnings to stderr.
pub fn print_warnings(warnings: &[String], quiet: bool) {
    if quiet {
        return;
    }
    for warning in warnings {
        eprintln!("Warning: {warning}");
    }
}
