//! Backup status checks

use crate::catalog::CatalogQuery;
use crate::checks::{format_value, Check};
use crate::domain::{BackupKinds, Severity, SizeUnit};

/// Jobs that failed or were fatally aborted within `days`
pub fn failed_backups(days: u32) -> Check {
    Check::new(
        CatalogQuery::FailedBackups { days },
        "bareos.backup.failed",
        move |n, _| format!("{n} Backups failed/canceled in the last {days} days"),
    )
}

/// Total size of matching backups, optionally within `days`
pub fn total_size(kinds: BackupKinds, days: Option<u32>, unit: SizeUnit) -> Check {
    let kind_list = kinds.to_string();
    Check::new(
        CatalogQuery::BackupSize { kinds, days, unit },
        "bareos.backup.size",
        move |n, _| match days {
            Some(days) => format!("{n} {unit} Kind:{kind_list} Days: {days}"),
            None => format!("{n} {unit} Kind:{kind_list}"),
        },
    )
}

/// Successful backups that wrote no data
pub fn empty_backups(kinds: BackupKinds, days: u32) -> Check {
    let kind_list = kinds.to_string();
    Check::new(
        CatalogQuery::EmptyBackups { kinds, days },
        "bareos.backup.empty",
        move |n, severity| match severity {
            Severity::Ok => format!("All {kind_list} Backups are fine"),
            _ => format!("{n} successful {kind_list} Backups are empty"),
        },
    )
}

/// Backups larger than `size` units within `days`
pub fn oversized_backups(kinds: BackupKinds, days: u32, size: f64, unit: SizeUnit) -> Check {
    let kind_list = kinds.to_string();
    let size_text = format_value(size);
    Check::new(
        CatalogQuery::OversizedBackups {
            kinds,
            days,
            size,
            unit,
        },
        "bareos.backup.oversized",
        move |n, _| {
            format!("{n} {kind_list} Backups larger than {size_text} {unit} in the last {days} days")
        },
    )
}
