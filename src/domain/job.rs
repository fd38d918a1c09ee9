//! Bareos job domain types
//!
//! Job status codes and backup levels as stored in the catalog `Job` table.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job status code (`Job.JobStatus`)
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    /// Completed successfully
    #[value(name = "T")]
    Terminated,
    /// Created, not yet running (queued)
    #[value(name = "C")]
    Created,
    /// Running
    #[value(name = "R")]
    Running,
    /// Terminated with errors
    #[value(name = "E")]
    Error,
    /// Fatal error
    #[value(name = "f")]
    Fatal,
    /// Canceled by user
    #[value(name = "A")]
    Canceled,
}

impl JobStatus {
    /// Single-character code stored in the catalog
    pub const fn code(self) -> &'static str {
        match self {
            Self::Terminated => "T",
            Self::Created => "C",
            Self::Running => "R",
            Self::Error => "E",
            Self::Fatal => "f",
            Self::Canceled => "A",
        }
    }

    /// Human readable description, as printed by the director
    pub const fn description(self) -> &'static str {
        match self {
            Self::Terminated => "Job terminated normally",
            Self::Created => "Job created but not yet running",
            Self::Running => "Job running",
            Self::Error => "Job terminated in error",
            Self::Fatal => "Job terminated due to fatal error",
            Self::Canceled => "Job canceled by user",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Backup level (`Job.Level`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BackupLevel {
    Full,
    Incremental,
    Differential,
}

impl BackupLevel {
    /// Single-character code stored in the catalog
    pub const fn code(self) -> &'static str {
        match self {
            Self::Full => "F",
            Self::Incremental => "I",
            Self::Differential => "D",
        }
    }
}

/// Set of backup levels a check is restricted to
///
/// Always non-empty and ordered full, incremental, differential.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackupKinds(Vec<BackupLevel>);

impl BackupKinds {
    /// Build from level flags; no flag selected means every level
    pub fn from_flags(full: bool, incremental: bool, differential: bool) -> Self {
        if !(full || incremental || differential) {
            return Self::all();
        }

        let levels = [
            (full, BackupLevel::Full),
            (incremental, BackupLevel::Incremental),
            (differential, BackupLevel::Differential),
        ]
        .into_iter()
        .filter_map(|(selected, level)| selected.then_some(level))
        .collect();

        Self(levels)
    }

    /// Every backup level
    pub fn all() -> Self {
        Self(vec![
            BackupLevel::Full,
            BackupLevel::Incremental,
            BackupLevel::Differential,
        ])
    }

    /// Level codes, suitable for binding as a text array
    pub fn codes(&self) -> Vec<String> {
        self.0.iter().map(|l| l.code().to_string()).collect()
    }
}

impl Default for BackupKinds {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for BackupKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self.0.iter().map(|l| format!("'{}'", l.code())).collect();
        f.write_str(&quoted.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_descriptions() {
        assert_eq!(JobStatus::Error.description(), "Job terminated in error");
        assert_eq!(JobStatus::Terminated.to_string(), "Job terminated normally");
        assert_eq!(JobStatus::Fatal.code(), "f");
    }

    #[test]
    fn test_status_from_cli_code() {
        let status = JobStatus::from_str("f", false).unwrap();
        assert_eq!(status, JobStatus::Fatal);
        let status = JobStatus::from_str("E", false).unwrap();
        assert_eq!(status, JobStatus::Error);
    }

    #[test]
    fn test_kinds_all_flags() {
        let kinds = BackupKinds::from_flags(true, true, true);
        assert_eq!(kinds.to_string(), "'F','I','D'");
    }

    #[test]
    fn test_kinds_no_flags_means_all() {
        assert_eq!(BackupKinds::from_flags(false, false, false), BackupKinds::all());
    }

    #[test]
    fn test_kinds_subset() {
        let kinds = BackupKinds::from_flags(true, false, true);
        assert_eq!(kinds.to_string(), "'F','D'");
        assert_eq!(kinds.codes(), vec!["F".to_string(), "D".to_string()]);
    }
}
