//! Mock implementations for testing
//!
//! Provides an in-memory catalog for unit testing without a database.

use crate::catalog::{Catalog, CatalogQuery};
use crate::error::CatalogError;

use std::collections::HashMap;

/// Mock catalog returning preset measurements
#[derive(Debug, Default)]
pub struct MockCatalog {
    default_value: f64,
    values: HashMap<&'static str, f64>,
    executed: Vec<CatalogQuery>,
    fail_with: Option<String>,
}

impl MockCatalog {
    /// Create a mock that answers every query with `value`
    pub fn new(value: f64) -> Self {
        Self {
            default_value: value,
            ..Default::default()
        }
    }

    /// Create a mock whose queries all fail
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Default::default()
        }
    }

    /// Builder: answer queries named `name` with `value`
    pub fn with_value(mut self, name: &'static str, value: f64) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Queries executed so far, in order
    pub fn executed(&self) -> &[CatalogQuery] {
        &self.executed
    }
}

impl Catalog for MockCatalog {
    fn measure(&mut self, query: &CatalogQuery) -> Result<f64, CatalogError> {
        self.executed.push(query.clone());

        if let Some(message) = &self.fail_with {
            return Err(CatalogError::Query(message.clone()));
        }

        Ok(self
            .values
            .get(query.name())
            .copied()
            .unwrap_or(self.default_value))
    }
}
