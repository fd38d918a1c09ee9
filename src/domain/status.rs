//! Plugin result severity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a check, ordered OK < WARNING < CRITICAL
///
/// `Unknown` is reserved for operational failures (bad arguments, unreachable
/// database) and is never produced by threshold evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Measurement within all thresholds
    Ok,
    /// Measurement breaches the warning range
    Warning,
    /// Measurement breaches the critical range
    Critical,
    /// The check could not be performed
    Unknown,
}

impl Severity {
    /// Process exit code consumed by the monitoring supervisor
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    /// Bracketed status tag, e.g. `[WARNING]`
    pub fn tag(self) -> String {
        format!("[{}]", self)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
        assert_eq!(Severity::Unknown.exit_code(), 3);
    }

    #[test]
    fn test_ordering() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
    }

    #[test]
    fn test_tag() {
        assert_eq!(Severity::Critical.tag(), "[CRITICAL]");
        assert_eq!(Severity::Ok.to_string(), "OK");
    }
}
