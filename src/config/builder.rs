//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist; without one the default locations are
    /// tried and silently skipped when absent.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI output format
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.general.format = f;
        }
        self
    }

    /// Override with CLI database host
    pub fn with_host(mut self, host: Option<String>) -> Self {
        if let Some(h) = host {
            self.config.database.host = h;
        }
        self
    }

    /// Override with CLI database port
    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(p) = port {
            self.config.database.port = p;
        }
        self
    }

    /// Override with CLI database user
    pub fn with_user(mut self, user: Option<String>) -> Self {
        if let Some(u) = user {
            self.config.database.user = Some(u);
        }
        self
    }

    /// Override with CLI database password
    pub fn with_password(mut self, password: Option<String>) -> Self {
        if let Some(p) = password {
            self.config.database.password = p;
        }
        self
    }

    /// Override with CLI database name
    pub fn with_database(mut self, name: Option<String>) -> Self {
        if let Some(n) = name {
            self.config.database.name = n;
        }
        self
    }

    /// Override with CLI connect timeout
    pub fn with_connect_timeout(mut self, seconds: Option<u64>) -> Self {
        if let Some(s) = seconds {
            self.config.database.connect_timeout_seconds = s;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_host(Some("catalog.local".to_string()))
            .with_port(Some(5433))
            .with_user(Some("bareos".to_string()))
            .with_password(Some("secret".to_string()))
            .with_database(Some("catalog".to_string()))
            .with_connect_timeout(Some(3))
            .build();

        assert!(config.general.verbose);
        assert_eq!(config.database.host, "catalog.local");
        assert_eq!(config.database.port, 5433);
        assert_eq!(config.database.user.as_deref(), Some("bareos"));
        assert_eq!(config.database.password, "secret");
        assert_eq!(config.database.name, "catalog");
        assert_eq!(config.database.connect_timeout_seconds, 3);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[database]\nhost = \"from-file\"\nuser = \"file-user\"\nport = 6000"
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_file(file.path().to_str())
            .unwrap()
            .with_host(Some("from-cli".to_string()))
            .with_port(None)
            .build();

        assert_eq!(config.database.host, "from-cli");
        assert_eq!(config.database.port, 6000);
        assert_eq!(config.database.user.as_deref(), Some("file-user"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/check_bareos.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
