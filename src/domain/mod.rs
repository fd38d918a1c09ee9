//! Domain models for check_bareos
//!
//! This module contains the threshold engine and the catalog domain types.
//! Types are validated on construction (fail-fast pattern).

pub mod job;
pub mod media;
pub mod result;
pub mod status;
pub mod threshold;
pub mod unit;

pub use job::{BackupKinds, BackupLevel, JobStatus};
pub use media::VolumeStatus;
pub use result::{CheckResult, PerfData};
pub use status::Severity;
pub use threshold::{check_threshold, Threshold, Thresholds};
pub use unit::SizeUnit;
