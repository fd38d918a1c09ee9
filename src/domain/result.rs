//! Plugin result types
//!
//! A [`CheckResult`] renders as the single line the monitoring supervisor
//! reads: `[SEVERITY] - message|label=value;warn;crit;;`.

use crate::domain::status::Severity;
use crate::domain::threshold::Thresholds;
use serde::Serialize;
use std::fmt;

/// One performance-metric fragment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerfData {
    pub label: String,
    pub value: f64,
    pub warning: String,
    pub critical: String,
}

impl PerfData {
    /// Create a metric carrying the threshold specs it was evaluated against
    pub fn new(label: impl Into<String>, value: f64, thresholds: &Thresholds) -> Self {
        Self {
            label: label.into(),
            value,
            warning: thresholds.warning_spec().to_string(),
            critical: thresholds.critical_spec().to_string(),
        }
    }

    fn needs_quoting(&self) -> bool {
        self.label.contains([' ', '=', '\''])
    }
}

impl fmt::Display for PerfData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_quoting() {
            write!(f, "'{}'", self.label.replace('\'', "''"))?;
        } else {
            f.write_str(&self.label)?;
        }
        write!(f, "={};{};{};;", self.value, self.warning, self.critical)
    }
}

/// Outcome of one plugin run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    severity: Severity,
    message: String,
    perfdata: Vec<PerfData>,
}

impl CheckResult {
    /// Create a result without performance data
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            perfdata: Vec::new(),
        }
    }

    /// Result for a check that could not be performed
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(Severity::Unknown, message)
    }

    /// Builder: attach a performance metric
    pub fn with_perfdata(mut self, perfdata: PerfData) -> Self {
        self.perfdata.push(perfdata);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn perfdata(&self) -> &[PerfData] {
        &self.perfdata
    }

    /// Performance section without the leading `|`
    pub fn perfdata_line(&self) -> String {
        self.perfdata
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Process exit code for this result
    pub fn exit_code(&self) -> i32 {
        self.severity.exit_code()
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.severity.tag(), self.message)?;
        if !self.perfdata.is_empty() {
            write!(f, "|{}", self.perfdata_line())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(w: &str, c: &str) -> Thresholds {
        Thresholds::parse(Some(w), Some(c)).unwrap()
    }

    #[test]
    fn test_perfdata_format() {
        let perf = PerfData::new("bareos.tape.empty", 2.0, &thresholds("3", "5"));
        assert_eq!(perf.to_string(), "bareos.tape.empty=2;3;5;;");
    }

    #[test]
    fn test_perfdata_quotes_labels_with_spaces() {
        let perf = PerfData::new("bareos.Job terminated in error", 4.0, &thresholds("3", "5"));
        assert_eq!(perf.to_string(), "'bareos.Job terminated in error'=4;3;5;;");
    }

    #[test]
    fn test_perfdata_escapes_quotes() {
        let perf = PerfData::new("it's", 1.0, &Thresholds::default());
        assert_eq!(perf.to_string(), "'it''s'=1;;;;");
    }

    #[test]
    fn test_perfdata_keeps_original_specs() {
        let perf = PerfData::new("bareos.job", 6.0, &thresholds("5:", "@1:3"));
        assert_eq!(perf.to_string(), "bareos.job=6;5:;@1:3;;");
    }

    #[test]
    fn test_perfdata_fractional_value() {
        let perf = PerfData::new("bareos.backup.size", 1.5, &thresholds("100", "200"));
        assert_eq!(perf.to_string(), "bareos.backup.size=1.5;100;200;;");
    }

    #[test]
    fn test_result_line() {
        let result = CheckResult::new(Severity::Critical, "10 Tapes are empty").with_perfdata(
            PerfData::new("bareos.tape.empty", 10.0, &thresholds("3", "5")),
        );
        assert_eq!(
            result.to_string(),
            "[CRITICAL] - 10 Tapes are empty|bareos.tape.empty=10;3;5;;"
        );
        assert_eq!(result.exit_code(), 2);
    }

    #[test]
    fn test_unknown_without_perfdata() {
        let result = CheckResult::unknown("Job Name missing");
        assert_eq!(result.to_string(), "[UNKNOWN] - Job Name missing");
        assert_eq!(result.exit_code(), 3);
    }
}
