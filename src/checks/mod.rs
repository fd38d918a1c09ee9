//! Check definitions
//!
//! A [`Check`] pairs a catalog measurement with the label and message the
//! result is reported under. All checks run through the same pipeline in
//! [`CheckService`](crate::services::CheckService).

pub mod backup;
pub mod job;
pub mod tape;

use crate::catalog::CatalogQuery;
use crate::domain::Severity;
use std::fmt;

type Describe = Box<dyn Fn(&str, Severity) -> String + Send + Sync>;

/// One configured check: what to measure and how to report it
pub struct Check {
    query: CatalogQuery,
    label: String,
    describe: Describe,
}

impl Check {
    /// Create a check
    ///
    /// `describe` receives the formatted measurement and the evaluated
    /// severity and returns the message shown after the status tag.
    pub fn new<F>(query: CatalogQuery, label: impl Into<String>, describe: F) -> Self
    where
        F: Fn(&str, Severity) -> String + Send + Sync + 'static,
    {
        Self {
            query,
            label: label.into(),
            describe: Box::new(describe),
        }
    }

    /// The measurement this check takes
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Performance data label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Status message for a measurement
    pub fn describe(&self, value: f64, severity: Severity) -> String {
        (self.describe)(&format_value(value), severity)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("query", &self.query)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Shortest decimal form: `2`, `1.5`, `0.125`
pub fn format_value(value: f64) -> String {
    value.to_string()
}
