//! Job command implementation

use crate::checks::job;
use crate::cli::args::{JobArgs, JobCommands};
use crate::commands::CheckPlan;
use crate::error::{AppError, Result};

/// Build the check for a job subcommand
pub fn plan_job(args: &JobArgs) -> Result<CheckPlan> {
    match &args.command {
        JobCommands::Jobs(filter) => Ok(CheckPlan::new(
            job::jobs_in_state(filter.state, filter.kinds.kinds(), filter.time),
            filter.thresholds.thresholds()?,
        )),
        JobCommands::Single { name, filter } => {
            let thresholds = filter.thresholds.thresholds()?;
            let name = name
                .clone()
                .filter(|n| !n.is_empty())
                .ok_or_else(|| AppError::MissingArgument("Job Name".to_string()))?;

            Ok(CheckPlan::new(
                job::single_job(name, filter.state, filter.kinds.kinds(), filter.time),
                thresholds,
            ))
        }
        JobCommands::Runtime {
            time,
            state,
            thresholds,
        } => Ok(CheckPlan::new(
            job::long_running_jobs(*state, *time),
            thresholds.thresholds()?,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogQuery;
    use crate::cli::args::{Cli, Commands};
    use crate::domain::{BackupKinds, JobStatus, Severity};
    use crate::mock::MockCatalog;
    use clap::Parser;

    fn plan(argv: &[&str]) -> Result<CheckPlan> {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Job(args) => plan_job(&args),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_single_job_requires_name() {
        let err = plan(&["check_bareos", "job", "single", "-s", "T"]).unwrap_err();
        assert!(matches!(err, AppError::MissingArgument(_)));
        assert_eq!(err.to_string(), "Job Name missing");
    }

    #[test]
    fn test_plan_jobs_default_state() {
        let plan = plan(&["check_bareos", "job", "jobs"]).unwrap();
        assert_eq!(
            plan.check.query(),
            &CatalogQuery::JobsInState {
                status: JobStatus::Created,
                kinds: BackupKinds::all(),
                days: 7,
            }
        );
        assert_eq!(plan.check.label(), "bareos.Job created but not yet running");
    }

    #[test]
    fn test_plan_runtime() {
        let plan = plan(&["check_bareos", "job", "runtime", "-s", "R", "-t", "2"]).unwrap();
        assert_eq!(
            plan.check.query(),
            &CatalogQuery::LongRunningJobs {
                status: JobStatus::Running,
                days: 2,
            }
        );
    }

    #[test]
    fn test_run_single_job() {
        let plan = plan(&[
            "check_bareos", "job", "single", "-n", "Jobby", "-s", "E", "-w", "3", "-c", "5",
        ])
        .unwrap();
        let result = plan.run_with(MockCatalog::new(6.0)).unwrap();
        assert_eq!(result.severity(), Severity::Critical);
        assert_eq!(
            result.message(),
            "6 Jobs are in the state: Job terminated in error"
        );
    }
}
