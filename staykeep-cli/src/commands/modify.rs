//! Modify command implementation.
//!
//! This module implements the `modify` command, which patches a
//! booking's dates and/or contact details.

use clap::Args;

use staykeep::operations::{ModifyOptions, ModifyPlan, PlanExecutor};
use staykeep::BookingCode;

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_interval, print_dry_run, GlobalOptions,
};

/// Change a booking's dates or contact details.
#[derive(Args)]
pub struct ModifyCommand {
    /// Confirmation code
    #[arg(value_name = "CODE")]
    pub code: String,

    /// New check-in date (YYYY-MM-DD, requires --check-out)
    #[arg(long, value_name = "DATE", requires = "check_out")]
    pub check_in: Option<String>,

    /// New check-out date (YYYY-MM-DD, requires --check-in)
    #[arg(long, value_name = "DATE", requires = "check_in")]
    pub check_out: Option<String>,

    /// New guest first name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// New guest surname
    #[arg(long, value_name = "SURNAME")]
    pub surname: Option<String>,

    /// New contact email
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// New contact phone number
    #[arg(long, value_name = "PHONE")]
    pub phone: Option<String>,

    /// Perform a dry run
    #[arg(long)]
    pub dry_run: bool,
}

impl ModifyCommand {
    /// Execute the modify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let code = self
            .code
            .parse::<BookingCode>()
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let mut options = ModifyOptions::new(code);
        if let (Some(check_in), Some(check_out)) = (&self.check_in, &self.check_out) {
            options = options.with_interval(parse_interval(check_in, check_out)?);
        }
        if let Some(name) = self.name {
            options = options.with_guest_name(name);
        }
        if let Some(surname) = self.surname {
            options = options.with_guest_surname(surname);
        }
        if let Some(email) = self.email {
            options = options.with_guest_email(email);
        }
        if let Some(phone) = self.phone {
            options = options.with_guest_phone(phone);
        }

        if options.is_empty() {
            return Err(CliError::InvalidArguments(
                "nothing to change: pass new dates or contact fields".into(),
            ));
        }

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let plan = ModifyPlan::new(options)
            .build_plan(&mut db)
            .map_err(CliError::from)?;

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
