//! Command handlers
//!
//! Each handler turns CLI arguments into a [`CheckPlan`]. Planning parses the
//! thresholds and validates arguments, so configuration errors surface
//! before the database is contacted.

pub mod job;
pub mod status;
pub mod tape;

pub use job::plan_job;
pub use status::plan_status;
pub use tape::plan_tape;

use crate::catalog::{Catalog, PgCatalog};
use crate::checks::Check;
use crate::cli::Commands;
use crate::config::Config;
use crate::domain::{CheckResult, Thresholds};
use crate::error::{AppError, Result};
use crate::services::CheckService;

/// A check ready to run
#[derive(Debug)]
pub struct CheckPlan {
    pub check: Check,
    pub thresholds: Thresholds,
}

impl CheckPlan {
    pub fn new(check: Check, thresholds: Thresholds) -> Self {
        Self { check, thresholds }
    }

    /// Run against any catalog
    pub fn run_with<C: Catalog>(&self, catalog: C) -> Result<CheckResult> {
        let mut service = CheckService::new(catalog);
        Ok(service.run(&self.check, &self.thresholds)?)
    }
}

/// Connect to the configured catalog and run a plan
pub fn execute(plan: &CheckPlan, config: &Config) -> Result<CheckResult> {
    let settings = config.database.connection_settings()?;
    let mut catalog = PgCatalog::connect(&settings)?;

    let result = plan.run_with(&mut catalog);

    if let Err(e) = catalog.close() {
        log::warn!("Failed to close catalog connection: {}", e);
    }

    result
}

/// Build the plan for a check subcommand
pub fn plan_command(command: &Commands) -> Result<CheckPlan> {
    match command {
        Commands::Job(args) => plan_job(args),
        Commands::Tape(args) => plan_tape(args),
        Commands::Status(args) => plan_status(args),
        Commands::Completions { .. } => {
            Err(AppError::Usage("completions is not a check".to_string()))
        }
    }
}

/// Plan and run a check subcommand
pub fn run_check(command: &Commands, config: &Config) -> Result<CheckResult> {
    let plan = plan_command(command)?;
    execute(&plan, config)
}
