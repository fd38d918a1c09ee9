//! Status command implementation

use crate::checks::backup;
use crate::cli::args::{StatusArgs, StatusCommands};
use crate::commands::CheckPlan;
use crate::error::{AppError, Result};

/// Build the check for a status subcommand
pub fn plan_status(args: &StatusArgs) -> Result<CheckPlan> {
    let plan = match &args.command {
        StatusCommands::TotalSize {
            time,
            unit,
            kinds,
            thresholds,
        } => CheckPlan::new(
            backup::total_size(kinds.kinds(), *time, *unit),
            thresholds.thresholds()?,
        ),
        StatusCommands::Empty {
            time,
            kinds,
            thresholds,
        } => CheckPlan::new(
            backup::empty_backups(kinds.kinds(), *time),
            thresholds.thresholds()?,
        ),
        StatusCommands::Oversized {
            time,
            size,
            unit,
            kinds,
            thresholds,
        } => {
            if !size.is_finite() || *size < 0.0 {
                return Err(AppError::Usage(format!("Invalid size: {size}")));
            }
            CheckPlan::new(
                backup::oversized_backups(kinds.kinds(), *time, *size, *unit),
                thresholds.thresholds()?,
            )
        }
        StatusCommands::Failed { time, thresholds } => {
            CheckPlan::new(backup::failed_backups(*time), thresholds.thresholds()?)
        }
    };

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogQuery;
    use crate::cli::args::{Cli, Commands};
    use crate::domain::{BackupKinds, SizeUnit};
    use crate::mock::MockCatalog;
    use clap::Parser;

    fn plan(argv: &[&str]) -> Result<CheckPlan> {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Status(args) => plan_status(&args),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_total_size_without_time_is_unrestricted() {
        let plan = plan(&["check_bareos", "status", "total-size"]).unwrap();
        assert_eq!(
            plan.check.query(),
            &CatalogQuery::BackupSize {
                kinds: BackupKinds::all(),
                days: None,
                unit: SizeUnit::Tb,
            }
        );
    }

    #[test]
    fn test_oversized_defaults() {
        let plan = plan(&["check_bareos", "status", "oversized", "-f"]).unwrap();
        assert_eq!(
            plan.check.query(),
            &CatalogQuery::OversizedBackups {
                kinds: BackupKinds::from_flags(true, false, false),
                days: 7,
                size: 2.0,
                unit: SizeUnit::Tb,
            }
        );
    }

    #[test]
    fn test_oversized_rejects_negative_size() {
        let result = plan(&["check_bareos", "status", "oversized", "-s", "-1"]);
        assert!(matches!(result, Err(AppError::Usage(_))));
    }

    #[test]
    fn test_run_failed_backups() {
        let plan = plan(&["check_bareos", "status", "failed", "-t", "1", "-w", "1", "-c", "2"]).unwrap();
        let result = plan.run_with(MockCatalog::new(3.0)).unwrap();
        assert_eq!(
            result.to_string(),
            "[CRITICAL] - 3 Backups failed/canceled in the last 1 days|bareos.backup.failed=3;1;2;;"
        );
    }
}
