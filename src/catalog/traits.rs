//! Trait definitions for catalog access
//!
//! This trait abstracts over the database to enable testing with mocks.

use crate::catalog::query::CatalogQuery;
use crate::error::CatalogError;

/// Source of catalog measurements
///
/// Implemented by [`PgCatalog`](crate::catalog::PgCatalog) against a live
/// database and by the mock catalog in tests.
pub trait Catalog {
    /// Run a query and return its single numeric result
    fn measure(&mut self, query: &CatalogQuery) -> Result<f64, CatalogError>;
}

impl<C: Catalog + ?Sized> Catalog for &mut C {
    fn measure(&mut self, query: &CatalogQuery) -> Result<f64, CatalogError> {
        (**self).measure(query)
    }
}
