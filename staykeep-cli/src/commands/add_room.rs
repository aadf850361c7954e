//! Add-room command implementation.

use clap::Args;

use staykeep::operations::{AddRoomOptions, PlanExecutor};
use staykeep::{NightlyRate, RoomId, RoomType};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_dry_run, GlobalOptions};

/// Add a room to the inventory.
#[derive(Args)]
pub struct AddRoomCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub id: i64,

    /// Room type (single, double, deluxe, suite, or a custom name)
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: String,

    /// Nightly rate in whole currency units (defaults to the type's rate)
    #[arg(long, value_name = "RATE")]
    pub rate: Option<i64>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl AddRoomCommand {
    /// Execute the add-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let id = RoomId::try_from(self.id)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
        let room_type = self
            .room_type
            .parse::<RoomType>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut options = AddRoomOptions::new(id, room_type);
        if let Some(rate) = self.rate {
            let rate = NightlyRate::try_from(rate)
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            options = options.with_nightly_rate(rate);
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = options.build_plan(&db).map_err(CliError::from)?;

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
