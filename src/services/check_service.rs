//! Check execution service
//!
//! Runs the measurement → evaluation → formatting pipeline shared by every
//! check.

use crate::catalog::Catalog;
use crate::checks::Check;
use crate::domain::{CheckResult, PerfData, Thresholds};
use crate::error::CatalogError;

/// Service that evaluates checks against a catalog
pub struct CheckService<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> CheckService<C> {
    /// Create a new check service
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Measure, evaluate and format one check
    pub fn run(&mut self, check: &Check, thresholds: &Thresholds) -> Result<CheckResult, CatalogError> {
        let value = self.catalog.measure(check.query())?;
        let severity = thresholds.evaluate(value);

        log::debug!(
            "{} = {} (warning '{}', critical '{}') -> {}",
            check.label(),
            value,
            thresholds.warning_spec(),
            thresholds.critical_spec(),
            severity
        );

        Ok(CheckResult::new(severity, check.describe(value, severity))
            .with_perfdata(PerfData::new(check.label(), value, thresholds)))
    }

    /// Give back the catalog, e.g. to close its connection
    pub fn into_inner(self) -> C {
        self.catalog
    }
}
