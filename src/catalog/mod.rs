//! Catalog database abstraction layer
//!
//! Provides trait-based access to the Bareos catalog for testability.

pub mod postgres;
pub mod query;
pub mod traits;

pub use postgres::PgCatalog;
pub use query::{CatalogQuery, Param, Statement};
pub use traits::Catalog;
