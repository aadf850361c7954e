//! Cancel command implementation.

use clap::Args;

use staykeep::operations::{CancelPlan, PlanExecutor};
use staykeep::BookingCode;

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_dry_run, GlobalOptions};

/// Cancel a booking by confirmation code.
#[derive(Args)]
pub struct CancelCommand {
    /// Confirmation code
    #[arg(value_name = "CODE")]
    pub code: String,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let code = self
            .code
            .parse::<BookingCode>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = CancelPlan::new(code).build_plan(&db).map_err(CliError::from)?;

        if self.dry_run {
            print_dry_run(&plan, global.quiet);
            return Ok(());
        }

        PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("{}", plan.description);
        }

        Ok(())
    }
}
