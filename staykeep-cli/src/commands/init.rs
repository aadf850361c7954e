//! Init command implementation.
//!
//! This module implements the `init` command, which creates the data
//! directory and database.

use clap::Args;

use staykeep::operations::{init_database, InitOptions};

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};

/// Initialize the data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite an existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create a starter configuration file
    #[arg(long)]
    pub create_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;

        let options = InitOptions::new(data_dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.create_config);

        let result = init_database(&options).map_err(CliError::from)?;

        if !global.quiet {
            if result.data_dir_created {
                eprintln!("Created data directory {}", result.data_dir.display());
            }
            if result.database_created {
                eprintln!(
                    "Initialized database at {}",
                    result.data_dir.join("staykeep.db").display()
                );
            }
            if result.config_created {
                eprintln!(
                    "Wrote starter config to {}",
                    result.data_dir.join("config.yaml").display()
                );
            }
        }

        Ok(())
    }
}
