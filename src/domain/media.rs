//! Bareos media (volume) domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Volume status (`Media.VolStatus`)
///
/// Only the states the tape checks look at are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeStatus {
    /// Volume had an I/O error and must not be used
    Error,
    /// Volume was disabled by the operator
    Disabled,
    /// All jobs on the volume were pruned
    Purged,
    /// Volume is ready to be recycled
    Recycle,
}

impl VolumeStatus {
    /// States in which a volume can be written again
    pub const REUSABLE: [VolumeStatus; 2] = [Self::Purged, Self::Recycle];

    /// Value stored in the catalog
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Disabled => "Disabled",
            Self::Purged => "Purged",
            Self::Recycle => "Recycle",
        }
    }
}

impl fmt::Display for VolumeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default mount count after which a tape is flagged for replacement
pub const DEFAULT_MAX_MOUNTS: u32 = 200;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        assert_eq!(VolumeStatus::Error.as_str(), "Error");
        assert_eq!(VolumeStatus::Recycle.to_string(), "Recycle");
    }

    #[test]
    fn test_reusable() {
        assert!(VolumeStatus::REUSABLE.contains(&VolumeStatus::Purged));
        assert!(!VolumeStatus::REUSABLE.contains(&VolumeStatus::Disabled));
    }
}
