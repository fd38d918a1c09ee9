//! Unified error types for check_bareos
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
///
/// Every variant ends the plugin run with an UNKNOWN result.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from threshold parsing/validation
    #[error("{0}")]
    Threshold(#[from] ThresholdError),

    /// Error from catalog database access
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A check was invoked without an argument it cannot work without
    #[error("{0} missing")]
    MissingArgument(String),

    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),
}

/// Errors from threshold specification parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThresholdError {
    /// The string does not match the range grammar
    #[error("Invalid threshold specification: '{0}'")]
    Parse(String),

    /// The bounds parsed but the upper bound is below the lower bound
    #[error("Invalid threshold '{spec}': max must exceed min ({max} < {min})")]
    Range { spec: String, min: f64, max: f64 },
}

/// Errors from catalog database access
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Could not establish the database connection
    #[error("Could not connect to database: {0}")]
    Connection(String),

    /// A query failed to execute or decode
    #[error("Query failed: {0}")]
    Query(String),

    /// Connecting or querying took longer than allowed
    #[error("Database did not respond within {0}s")]
    Timeout(u64),

    /// The async runtime driving the connection could not be started
    #[error("Failed to start database runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but could not be read
    #[error("Cannot read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Missing required config field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
