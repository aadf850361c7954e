//! Delete-room command implementation.
//!
//! Removing a room cancels every booking attached to it in the same
//! transaction, so the command shows the cascade in its dry-run output
//! and warns before committing.

use clap::Args;

use staykeep::operations::{plan_remove_room, PlanExecutor};
use staykeep::RoomId;

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, print_dry_run, print_warnings, GlobalOptions,
};

/// Remove a room and every booking attached to it.
#[derive(Args)]
pub struct DeleteRoomCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub id: i64,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl DeleteRoomCommand {
    /// Execute the delete-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = RoomId::try_from(self.id)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = plan_remove_room(&db, id).map_err(CliError::from)?;

        if self.dry_run {
            print_dry_run(&plan, global.quiet);
            return Ok(());
        }

        let result = PlanExecutor::new(&mut db)
            .execute(&plan)
            .map_err(CliError::from)?;

        print_warnings(&result.warnings, global.quiet);
        if !global.quiet {
            eprintln!("{}", plan.description);
        }

        Ok(())
    }
}
