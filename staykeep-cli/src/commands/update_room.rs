//! Update-room command implementation.

use clap::Args;

use staykeep::operations::{PlanExecutor, UpdateRoomOptions};
use staykeep::{NightlyRate, RoomId, RoomType};

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_dry_run, GlobalOptions};

/// Change a room's type or nightly rate.
#[derive(Args)]
pub struct UpdateRoomCommand {
    /// Room number
    #[arg(value_name = "ROOM")]
    pub id: i64,

    /// New room type
    #[arg(long = "type", value_name = "TYPE")]
    pub room_type: Option<String>,

    /// New nightly rate in whole currency units
    #[arg(long, value_name = "RATE")]
    pub rate: Option<i64>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl UpdateRoomCommand {
    /// Execute the update-room command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.room_type.is_none() && self.rate.is_none() {
            return Err(CliError::InvalidArguments(
                "nothing to change: pass --type and/or --rate".into(),
            ));
        }

        let id = RoomId::try_from(self.id)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut options = UpdateRoomOptions::new(id);
        if let Some(room_type) = self.room_type {
            let room_type = room_type
                .parse::<RoomType>()
                .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
            options = options.with_room_type(room_type);
        }
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
