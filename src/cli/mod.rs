//! CLI module for snippetd
//!
//! Provides the command-line interface:
//! - init: Create the database and seed example rows
//! - serve: Bootstrap the database and start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use errors::{CliError, CliResult};
