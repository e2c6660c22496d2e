//! CLI command implementations
//!
//! Both commands load configuration, then bootstrap the database before
//! doing anything else. `serve` additionally binds the HTTP listener, so
//! schema creation and seeding are never reachable over the network.

use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::config::Config;
use crate::http_server::HttpServer;
use crate::storage::SnippetStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Create the snippet database and seed example rows
///
/// Idempotent: running against an existing database changes nothing.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path).map_err(CliError::config)?;

    let store = SnippetStore::new(&config.database_path);
    store.bootstrap().map_err(CliError::boot)?;

    println!(
        "{}",
        json!({"initialized": true, "database": config.database_path})
    );

    Ok(())
}

/// Bootstrap the database and start the HTTP server
///
/// Startup sequence:
/// 1. Configuration load (with optional port override)
/// 2. Database bootstrap (table creation + one-time seeding)
/// 3. Listener bind and serving loop
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path).map_err(CliError::config)?;
    if let Some(port) = port {
        config.port = port;
    }

    init_tracing();

    let store = Arc::new(SnippetStore::new(&config.database_path));
    store.bootstrap().map_err(CliError::boot)?;
    tracing::info!(database = %config.database_path, "database ready");

    let server = HttpServer::new(store, &config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot(format!("failed to create tokio runtime: {}", e)))?;

    rt.block_on(async { server.start().await.map_err(CliError::server) })
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
