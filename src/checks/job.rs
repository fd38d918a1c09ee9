//! Job state checks

use crate::catalog::CatalogQuery;
use crate::checks::Check;
use crate::domain::{BackupKinds, JobStatus};

fn state_label(status: JobStatus) -> String {
    format!("bareos.{}", status.description())
}

/// Jobs at the given levels currently in `status`
pub fn jobs_in_state(status: JobStatus, kinds: BackupKinds, days: u32) -> Check {
    Check::new(
        CatalogQuery::JobsInState {
            status,
            kinds,
            days,
        },
        state_label(status),
        move |n, _| format!("{n} Jobs are in the state: {}", status.description()),
    )
}

/// Runs of jobs named like `name` in `status`
pub fn single_job(name: String, status: JobStatus, kinds: BackupKinds, days: u32) -> Check {
    Check::new(
        CatalogQuery::SingleJob {
            name,
            status,
            kinds,
            days,
        },
        state_label(status),
        move |n, _| format!("{n} Jobs are in the state: {}", status.description()),
    )
}

/// Jobs in `status` that started more than `days` ago
pub fn long_running_jobs(status: JobStatus, days: u32) -> Check {
    Check::new(
        CatalogQuery::LongRunningJobs { status, days },
        "bareos.job.count",
        move |n, _| format!("{n} Jobs are running longer than {days} days"),
    )
}
