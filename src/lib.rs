//! check_bareos - Bareos catalog monitoring plugin library
//!
//! This library provides the checks behind the `check_bareos` plugin: job,
//! tape and backup state read from the Bareos catalog database and judged
//! against plugin-style threshold ranges.
//!
//! # Modules
//!
//! - [`catalog`]: Catalog queries and the PostgreSQL backend
//! - [`checks`]: Check definitions (query, label, message)
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models, thresholds and results
//! - [`error`]: Error types
//! - [`services`]: Check execution

pub mod catalog;
pub mod checks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
