//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::args::OutputFormat;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Catalog database settings
    pub database: DatabaseConfig,
}

/// General configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Output format
    pub format: OutputFormat,
}

/// Catalog database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database host
    pub host: String,
    /// Database port
    pub port: u16,
    /// User name for the database connection
    pub user: Option<String>,
    /// Password for the database connection
    pub password: String,
    /// Database name
    pub name: String,
    /// Connect and query timeout in seconds
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            user: None,
            password: String::new(),
            name: "bareos".to_string(),
            connect_timeout_seconds: 10,
        }
    }
}

impl DatabaseConfig {
    /// Resolve into settings a connection can be opened with
    pub fn connection_settings(&self) -> Result<ConnectionSettings, ConfigError> {
        let user = self
            .user
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| ConfigError::MissingField("database.user".to_string()))?;

        Ok(ConnectionSettings {
            host: self.host.clone(),
            port: self.port,
            user,
            password: self.password.clone(),
            database: self.name.clone(),
            timeout: Duration::from_secs(self.connect_timeout_seconds.max(1)),
        })
    }
}

/// Fully resolved connection parameters
#[derive(Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub timeout: Duration,
}

impl std::fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("timeout", &self.timeout)
            .finish()
    }
}
