//! Threshold range types
//!
//! Parses monitoring-plugin range specifications such as `10`, `10:`, `~:10`,
//! `10:20` and `@10:20`, and classifies measurements against them.
//!
//! ```text
//! spec  := ['@'] [ start ':' ] [ end ]
//! start := '~' | number
//! end   := number
//! ```
//!
//! Without `@` a value alarms when it falls outside the closed interval
//! `[start, end]`. With `@` it alarms when it falls inside it.

use crate::domain::status::Severity;
use crate::error::ThresholdError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A parsed warning or critical range
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    original_spec: String,
    lower_bound: f64,
    upper_bound: f64,
    inclusive_is_alarm: bool,
}

impl Threshold {
    /// Parse a threshold specification
    pub fn parse(spec: &str) -> Result<Self, ThresholdError> {
        let invalid = || ThresholdError::Parse(spec.to_string());

        let (inclusive_is_alarm, body) = match spec.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };

        if body.is_empty() {
            return Err(invalid());
        }

        let (lower_bound, end) = match body.split_once(':') {
            Some((start, end)) => {
                let lower = match start {
                    "" | "~" => f64::NEG_INFINITY,
                    number => parse_number(number).ok_or_else(invalid)?,
                };
                (lower, end)
            }
            None => (0.0, body),
        };

        let upper_bound = if end.is_empty() {
            f64::INFINITY
        } else {
            parse_number(end).ok_or_else(invalid)?
        };

        if upper_bound < lower_bound {
            return Err(ThresholdError::Range {
                spec: spec.to_string(),
                min: lower_bound,
                max: upper_bound,
            });
        }

        Ok(Self {
            original_spec: spec.to_string(),
            lower_bound,
            upper_bound,
            inclusive_is_alarm,
        })
    }

    /// Check whether a measurement breaches this range
    pub fn contains_alarm(&self, value: f64) -> bool {
        if self.inclusive_is_alarm {
            value >= self.lower_bound && value <= self.upper_bound
        } else {
            value < self.lower_bound || value > self.upper_bound
        }
    }

    /// The specification exactly as given
    pub fn original_spec(&self) -> &str {
        &self.original_spec
    }

    /// Lower bound, possibly negative infinity
    #[inline]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    /// Upper bound, possibly positive infinity
    #[inline]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    /// Whether values inside the bounds alarm (`@` prefix)
    #[inline]
    pub fn inclusive_is_alarm(&self) -> bool {
        self.inclusive_is_alarm
    }
}

/// Strict decimal: optional minus, digits, optional fraction with digits.
///
/// `f64::from_str` alone would also accept `inf`, `NaN` and exponents.
fn parse_number(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return None;
    }

    text.parse().ok()
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original_spec)
    }
}

impl Serialize for Threshold {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original_spec)
    }
}

/// Classify a measurement against optional warning and critical ranges
///
/// Critical is checked first, so a value breaching both ranges is CRITICAL.
/// A missing range never alarms.
pub fn check_threshold(
    value: f64,
    warning: Option<&Threshold>,
    critical: Option<&Threshold>,
) -> Severity {
    if critical.is_some_and(|t| t.contains_alarm(value)) {
        Severity::Critical
    } else if warning.is_some_and(|t| t.contains_alarm(value)) {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

/// Warning and critical ranges configured for one check
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Thresholds {
    pub warning: Option<Threshold>,
    pub critical: Option<Threshold>,
}

impl Thresholds {
    /// Parse both specifications, failing on the first invalid one
    pub fn parse(warning: Option<&str>, critical: Option<&str>) -> Result<Self, ThresholdError> {
        Ok(Self {
            warning: warning.map(Threshold::parse).transpose()?,
            critical: critical.map(Threshold::parse).transpose()?,
        })
    }

    /// Evaluate a measurement against both ranges
    pub fn evaluate(&self, value: f64) -> Severity {
        check_threshold(value, self.warning.as_ref(), self.critical.as_ref())
    }

    /// Warning spec for performance data (empty when unset)
    pub fn warning_spec(&self) -> &str {
        self.warning.as_ref().map_or("", Threshold::original_spec)
    }

    /// Critical spec for performance data (empty when unset)
    pub fn critical_spec(&self) -> &str {
        self.critical.as_ref().map_or("", Threshold::original_spec)
    }
}
