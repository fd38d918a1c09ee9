//! Output formatting utilities
//!
//! Renders a check result as a plugin status line or as JSON.

use crate::cli::args::OutputFormat;
use crate::domain::{CheckResult, PerfData, Severity};
use serde::Serialize;
use std::io::{self, Write};

/// JSON view of a check result
#[derive(Debug, Serialize)]
pub struct JsonResult<'a> {
    pub status: Severity,
    pub exit_code: i32,
    pub message: &'a str,
    pub perfdata: &'a [PerfData],
}

impl<'a> From<&'a CheckResult> for JsonResult<'a> {
    fn from(result: &'a CheckResult) -> Self {
        Self {
            status: result.severity(),
            exit_code: result.exit_code(),
            message: result.message(),
            perfdata: result.perfdata(),
        }
    }
}

/// Render a result in the selected format
pub fn render(result: &CheckResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Nagios => result.to_string(),
        OutputFormat::Json => serde_json::to_string(&JsonResult::from(result))
            .unwrap_or_else(|_| "{}".to_string()),
    }
}

/// Format and print a result to stdout
pub fn print_output(result: &CheckResult, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", render(result, format))?;
    handle.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Thresholds;

    fn sample() -> CheckResult {
        let thresholds = Thresholds::parse(Some("3"), Some("5")).unwrap();
        CheckResult::new(Severity::Warning, "4 Tapes are expired")
            .with_perfdata(PerfData::new("bareos.tape.expired", 4.0, &thresholds))
    }

    #[test]
    fn test_render_nagios() {
        assert_eq!(
            render(&sample(), OutputFormat::Nagios),
            "[WARNING] - 4 Tapes are expired|bareos.tape.expired=4;3;5;;"
        );
    }

    #[test]
    fn test_render_json() {
        let json: serde_json::Value =
            serde_json::from_str(&render(&sample(), OutputFormat::Json)).unwrap();
        assert_eq!(json["status"], "WARNING");
        assert_eq!(json["exit_code"], 1);
        assert_eq!(json["message"], "4 Tapes are expired");
        assert_eq!(json["perfdata"][0]["label"], "bareos.tape.expired");
        assert_eq!(json["perfdata"][0]["value"], 4.0);
        assert_eq!(json["perfdata"][0]["warning"], "3");
    }

    #[test]
    fn test_render_json_unknown() {
        let result = CheckResult::unknown("Job Name missing");
        let json: serde_json::Value =
            serde_json::from_str(&render(&result, OutputFormat::Json)).unwrap();
        assert_eq!(json["status"], "UNKNOWN");
        assert_eq!(json["exit_code"], 3);
        assert!(json["perfdata"].as_array().unwrap().is_empty());
    }
}
