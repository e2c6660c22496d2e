//! CLI argument definitions using clap
//!
//! Commands:
//! - snippetd init --config <path>
//! - snippetd serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// snippetd - A self-hostable code snippet API server
#[derive(Parser, Debug)]
#[command(name = "snippetd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the snippet database and seed example rows
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./snippetd.json")]
        config: PathBuf,
    },

    /// Start the snippet API server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./snippetd.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
