//! # Configuration
//!
//! JSON configuration file for the server, loaded by the CLI. All fields
//! have defaults, so a missing file yields a runnable configuration. The
//! `SNIPPETD_DB` environment variable overrides the database path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding `database_path`.
pub const DATABASE_ENV_VAR: &str = "SNIPPETD_DB";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file path (default: "./snippets.db")
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 7878)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive (default: empty)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_database_path() -> String {
    "./snippets.db".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    7878
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist. The `SNIPPETD_DB` environment variable, when
    /// set, overrides the configured database path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_json::from_str::<Config>(&content)?
        } else {
            Config::default()
        };

        if let Ok(database_path) = std::env::var(DATABASE_ENV_VAR) {
            config.database_path = database_path;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.is_empty() {
            return Err(ConfigError::Invalid(
                "database_path must not be empty".to_string(),
            ));
        }
        if self.host.is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.database_path, "./snippets.db");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7878);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = Config {
            port: 8080,
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load(&temp_dir.path().join("absent.json")).unwrap();
        assert_eq!(config.port, 7878);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snippetd.json");
        fs::write(&path, r#"{"port": 9000}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.database_path, "./snippets.db");
    }

    #[test]
    fn test_rejects_empty_database_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snippetd.json");
        fs::write(&path, r#"{"database_path": ""}"#).unwrap();

        assert!(Config::load(&path).is_err());
    }
}
