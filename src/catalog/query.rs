//! Catalog measurement queries
//!
//! Each [`CatalogQuery`] yields exactly one number. The SQL text is static
//! and every operator-supplied value is bound as a parameter.

use crate::domain::{BackupKinds, JobStatus, SizeUnit, VolumeStatus};

/// A measurement to take from the catalog
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogQuery {
    /// Jobs that failed or hit a fatal error within `days`
    FailedBackups { days: u32 },
    /// Total size of matching backups, optionally within `days`
    BackupSize {
        kinds: BackupKinds,
        days: Option<u32>,
        unit: SizeUnit,
    },
    /// Matching backups within `days` larger than `size` units
    OversizedBackups {
        kinds: BackupKinds,
        days: u32,
        size: f64,
        unit: SizeUnit,
    },
    /// Successful matching backups within `days` that wrote no bytes
    EmptyBackups { kinds: BackupKinds, days: u32 },
    /// Matching jobs in `status` started within `days` (or not started yet)
    JobsInState {
        status: JobStatus,
        kinds: BackupKinds,
        days: u32,
    },
    /// Like `JobsInState`, restricted to job names containing `name`
    SingleJob {
        name: String,
        status: JobStatus,
        kinds: BackupKinds,
        days: u32,
    },
    /// Jobs in `status` that started more than `days` ago
    LongRunningJobs { status: JobStatus, days: u32 },
    /// Volumes loaded in a changer slot
    TapesInStorage,
    /// Volumes whose retention period has elapsed
    ExpiredTapes,
    /// Volumes whose retention period elapses within `days`
    ExpiringTapes { days: u32 },
    /// Volumes with errors, disabled, or mounted more than `mounts` times
    ReplaceTapes { mounts: u32 },
    /// Volumes in the changer that can be written again
    EmptyTapes,
}

/// A value bound to a statement placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Int(i32),
    BigInt(i64),
    Float(f64),
    Text(String),
    TextArray(Vec<String>),
}

/// SQL text plus its positional parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<Param>,
}

impl Statement {
    fn new(sql: &'static str, params: Vec<Param>) -> Self {
        Self { sql, params }
    }
}

const FAILED_BACKUPS: &str = "\
SELECT COUNT(*)::float8
FROM Job
WHERE JobStatus::text = ANY($1)
  AND StartTime > (now()::date - make_interval(days => $2))";

const BACKUP_SIZE: &str = "\
SELECT ROUND(COALESCE(SUM(JobBytes), 0) / $1::numeric, 3)::float8
FROM Job
WHERE Level::text = ANY($2)";

const BACKUP_SIZE_WITHIN: &str = "\
SELECT ROUND(COALESCE(SUM(JobBytes), 0) / $1::numeric, 3)::float8
FROM Job
WHERE Level::text = ANY($2)
  AND StartTime > (now() - make_interval(days => $3))";

const OVERSIZED_BACKUPS: &str = "\
SELECT COUNT(*)::float8
FROM Job
WHERE Level::text = ANY($1)
  AND StartTime > (now()::date - make_interval(days => $2))
  AND JobBytes / $3::float8 > $4";

const EMPTY_BACKUPS: &str = "\
SELECT COUNT(*)::float8
FROM Job
WHERE Level::text = ANY($1)
  AND JobBytes = 0
  AND StartTime > (now()::date - make_interval(days => $2))
  AND JobStatus::text = $3";

const JOBS_IN_STATE: &str = "\
SELECT COUNT(*)::float8
FROM Job
WHERE JobStatus::text = $1
  AND (StartTime > (now()::date - make_interval(days => $2)) OR StartTime IS NULL)
  AND Level::text = ANY($3)";

const SINGLE_JOB: &str = "\
SELECT COUNT(*)::float8
FROM Job
WHERE JobStatus::text = $1
  AND (StartTime > (now()::date - make_interval(days => $2)) OR StartTime IS NULL)
  AND Level::text = ANY($3)
  AND Name LIKE '%' || $4 || '%'";

const LONG_RUNNING_JOBS: &str = "\
SELECT COUNT(*)::float8
FROM Job
WHERE StartTime < (now()::date - make_interval(days => $1))
  AND JobStatus::text = $2";

const TAPES_IN_STORAGE: &str = "\
SELECT COUNT(Media.MediaId)::float8
FROM Media
JOIN Pool ON Media.PoolId = Pool.PoolId
JOIN Storage ON Media.StorageId = Storage.StorageId
WHERE Media.Slot > 0
  AND Media.InChanger = 1";

const EXPIRED_TAPES: &str = "\
SELECT COUNT(MediaId)::float8
FROM Media
WHERE LastWritten + (VolRetention * '1 second'::interval) < now()
  AND VolStatus <> $1";

const EXPIRING_TAPES: &str = "\
SELECT COUNT(MediaId)::float8
FROM Media
WHERE LastWritten + (VolRetention * '1 second'::interval) < now() + make_interval(days => $1)
  AND LastWritten + (VolRetention * '1 second'::interval) > now()
  AND VolStatus <> $2";

const REPLACE_TAPES: &str = "\
SELECT COUNT(VolumeName)::float8
FROM Media
WHERE VolErrors > 0
   OR VolStatus = $1
   OR VolMounts > $2
   OR VolStatus = $3";

const EMPTY_TAPES: &str = "\
SELECT COUNT(Media.MediaId)::float8
FROM Media
JOIN Pool ON Media.PoolId = Pool.PoolId
JOIN Storage ON Media.StorageId = Storage.StorageId
WHERE Media.Slot > 0
  AND Media.InChanger = 1
  AND (Media.VolStatus = ANY($1)
       OR (Media.LastWritten + (Media.VolRetention * '1 second'::interval) < now()
           AND Media.VolStatus <> $2))";

impl CatalogQuery {
    /// Short name used in logs and by the mock catalog
    pub fn name(&self) -> &'static str {
        match self {
            Self::FailedBackups { .. } => "failed_backups",
            Self::BackupSize { .. } => "backup_size",
            Self::OversizedBackups { .. } => "oversized_backups",
            Self::EmptyBackups { .. } => "empty_backups",
            Self::JobsInState { .. } => "jobs_in_state",
            Self::SingleJob { .. } => "single_job",
            Self::LongRunningJobs { .. } => "long_running_jobs",
            Self::TapesInStorage => "tapes_in_storage",
            Self::ExpiredTapes => "expired_tapes",
            Self::ExpiringTapes { .. } => "expiring_tapes",
            Self::ReplaceTapes { .. } => "replace_tapes",
            Self::EmptyTapes => "empty_tapes",
        }
    }

    /// Build the PostgreSQL statement for this measurement
    pub fn statement(&self) -> Statement {
        match self {
            Self::FailedBackups { days } => Statement::new(
                FAILED_BACKUPS,
                vec![
                    status_codes(&[JobStatus::Error, JobStatus::Fatal]),
                    days_param(*days),
                ],
            ),
            Self::BackupSize { kinds, days, unit } => {
                let mut params = vec![factor_param(*unit), Param::TextArray(kinds.codes())];
                match days {
                    Some(days) => {
                        params.push(days_param(*days));
                        Statement::new(BACKUP_SIZE_WITHIN, params)
                    }
                    None => Statement::new(BACKUP_SIZE, params),
                }
            }
            Self::OversizedBackups {
                kinds,
                days,
                size,
                unit,
            } => Statement::new(
                OVERSIZED_BACKUPS,
                vec![
                    Param::TextArray(kinds.codes()),
                    days_param(*days),
                    factor_param(*unit),
                    Param::Float(*size),
                ],
            ),
            Self::EmptyBackups { kinds, days } => Statement::new(
                EMPTY_BACKUPS,
                vec![
                    Param::TextArray(kinds.codes()),
                    days_param(*days),
                    Param::Text(JobStatus::Terminated.code().to_string()),
                ],
            ),
            Self::JobsInState { status, kinds, days } => Statement::new(
                JOBS_IN_STATE,
                vec![
                    Param::Text(status.code().to_string()),
                    days_param(*days),
                    Param::TextArray(kinds.codes()),
                ],
            ),
            Self::SingleJob {
                name,
                status,
                kinds,
                days,
            } => Statement::new(
                SINGLE_JOB,
                vec![
                    Param::Text(status.code().to_string()),
                    days_param(*days),
                    Param::TextArray(kinds.codes()),
                    Param::Text(name.clone()),
                ],
            ),
            Self::LongRunningJobs { status, days } => Statement::new(
                LONG_RUNNING_JOBS,
                vec![days_param(*days), Param::Text(status.code().to_string())],
            ),
            Self::TapesInStorage => Statement::new(TAPES_IN_STORAGE, vec![]),
            Self::ExpiredTapes => Statement::new(
                EXPIRED_TAPES,
                vec![volume_status(VolumeStatus::Error)],
            ),
            Self::ExpiringTapes { days } => Statement::new(
                EXPIRING_TAPES,
                vec![days_param(*days), volume_status(VolumeStatus::Error)],
            ),
            Self::ReplaceTapes { mounts } => Statement::new(
                REPLACE_TAPES,
                vec![
                    volume_status(VolumeStatus::Error),
                    Param::Int(saturating_i32(*mounts)),
                    volume_status(VolumeStatus::Disabled),
                ],
            ),
            Self::EmptyTapes => Statement::new(
                EMPTY_TAPES,
                vec![
                    Param::TextArray(
                        VolumeStatus::REUSABLE
                            .iter()
                            .map(|s| s.as_str().to_string())
                            .collect(),
                    ),
                    volume_status(VolumeStatus::Error),
                ],
            ),
        }
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn days_param(days: u32) -> Param {
    Param::Int(saturating_i32(days))
}

fn factor_param(unit: SizeUnit) -> Param {
    // 2^60 is the largest factor and still fits.
    Param::BigInt(unit.factor() as i64)
}

fn status_codes(statuses: &[JobStatus]) -> Param {
    Param::TextArray(statuses.iter().map(|s| s.code().to_string()).collect())
}

fn volume_status(status: VolumeStatus) -> Param {
    Param::Text(status.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_count(sql: &str) -> usize {
        (1..=9).filter(|n| sql.contains(&format!("${n}"))).count()
    }

    fn all_queries() -> Vec<CatalogQuery> {
        let kinds = BackupKinds::all();
        vec![
            CatalogQuery::FailedBackups { days: 7 },
            CatalogQuery::BackupSize {
                kinds: kinds.clone(),
                days: None,
                unit: SizeUnit::Tb,
            },
            CatalogQuery::BackupSize {
                kinds: kinds.clone(),
                days: Some(3),
                unit: SizeUnit::Tb,
            },
            CatalogQuery::OversizedBackups {
                kinds: kinds.clone(),
                days: 7,
                size: 2.0,
                unit: SizeUnit::Tb,
            },
            CatalogQuery::EmptyBackups {
                kinds: kinds.clone(),
                days: 7,
            },
            CatalogQuery::JobsInState {
                status: JobStatus::Created,
                kinds: kinds.clone(),
                days: 7,
            },
            CatalogQuery::SingleJob {
                name: "backup-client".to_string(),
                status: JobStatus::Error,
                kinds,
                days: 7,
            },
            CatalogQuery::LongRunningJobs {
                status: JobStatus::Running,
                days: 1,
            },
            CatalogQuery::TapesInStorage,
            CatalogQuery::ExpiredTapes,
            CatalogQuery::ExpiringTapes { days: 7 },
            CatalogQuery::ReplaceTapes { mounts: 200 },
            CatalogQuery::EmptyTapes,
        ]
    }

    #[test]
    fn test_placeholders_match_params() {
        for query in all_queries() {
            let statement = query.statement();
            assert_eq!(
                placeholder_count(statement.sql),
                statement.params.len(),
                "parameter mismatch for {}",
                query.name()
            );
        }
    }

    #[test]
    fn test_every_query_is_a_single_scalar() {
        for query in all_queries() {
            let sql = query.statement().sql;
            assert!(sql.starts_with("SELECT "), "{}", query.name());
            assert!(sql.contains("::float8"), "{}", query.name());
        }
    }

    #[test]
    fn test_failed_backups_binds_error_states() {
        let statement = CatalogQuery::FailedBackups { days: 1 }.statement();
        assert_eq!(
            statement.params,
            vec![
                Param::TextArray(vec!["E".to_string(), "f".to_string()]),
                Param::Int(1)
            ]
        );
    }

    #[test]
    fn test_backup_size_time_restriction() {
        let kinds = BackupKinds::from_flags(true, false, false);
        let unrestricted = CatalogQuery::BackupSize {
            kinds: kinds.clone(),
            days: None,
            unit: SizeUnit::Pb,
        }
        .statement();
        assert!(!unrestricted.sql.contains("StartTime"));
        assert_eq!(unrestricted.params[0], Param::BigInt(1 << 50));

        let restricted = CatalogQuery::BackupSize {
            kinds,
            days: Some(1),
            unit: SizeUnit::Pb,
        }
        .statement();
        assert!(restricted.sql.contains("StartTime"));
        assert_eq!(restricted.params[1], Param::TextArray(vec!["F".to_string()]));
        assert_eq!(restricted.params[2], Param::Int(1));
    }

    #[test]
    fn test_single_job_name_is_bound_not_interpolated() {
        let query = CatalogQuery::SingleJob {
            name: "x'; DROP TABLE Job; --".to_string(),
            status: JobStatus::Error,
            kinds: BackupKinds::all(),
            days: 1,
        };
        let statement = query.statement();
        assert!(!statement.sql.contains("DROP"));
        assert_eq!(
            statement.params[3],
            Param::Text("x'; DROP TABLE Job; --".to_string())
        );
    }

    #[test]
    fn test_days_saturate() {
        let statement = CatalogQuery::ExpiringTapes { days: u32::MAX }.statement();
        assert_eq!(statement.params[0], Param::Int(i32::MAX));
    }

    #[test]
    fn test_empty_tapes_binds_reusable_states() {
        let statement = CatalogQuery::EmptyTapes.statement();
        assert_eq!(
            statement.params[0],
            Param::TextArray(vec!["Purged".to_string(), "Recycle".to_string()])
        );
    }
}
