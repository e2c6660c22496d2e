//! CLI-specific error types
//!
//! All CLI errors are fatal: they are printed to stderr and the process
//! exits non-zero.

use std::fmt;

use thiserror::Error;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file error
    #[error("config error: {0}")]
    Config(String),

    /// Database bootstrap failure
    #[error("boot failed: {0}")]
    Boot(String),

    /// HTTP server failure
    #[error("server failed: {0}")]
    Server(String),
}

impl CliError {
    /// Config error from any displayable cause
    pub fn config(err: impl fmt::Display) -> Self {
        Self::Config(err.to_string())
    }

    /// Boot error from any displayable cause
    pub fn boot(err: impl fmt::Display) -> Self {
        Self::Boot(err.to_string())
    }

    /// Server error from any displayable cause
    pub fn server(err: impl fmt::Display) -> Self {
        Self::Server(err.to_string())
    }
}
