//! CLI command implementations
//!
//! Boot sequence for `serve`:
//! 1. Resolve configuration (file, then flag overrides)
//! 2. Load the record store (fatal on failure)
//! 3. Bind and serve
//!
//! The store is fully loaded before the listener accepts a connection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, ServerConfig};
use crate::query::{QueryEngine, TodoQuery};
use crate::store::{RecordStore, Todo};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::write_todos;

/// Parse arguments, install logging and dispatch
pub fn run() -> CliResult<()> {
    init_logging();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { config, data, port } => {
            let config = resolve_config(config.as_deref(), data, port)?;
            serve(config)
        }
        Command::Query { data, params } => {
            let todos = query(&data, params)?;
            write_todos(&todos)
        }
    }
}

/// `RUST_LOG` wins; otherwise info for this crate and request traces.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    // Logs go to stderr so `query` output on stdout stays pure JSON
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Build the effective configuration
pub fn resolve_config(
    path: Option<&Path>,
    data: Option<PathBuf>,
    port: Option<u16>,
) -> CliResult<ServerConfig> {
    let mut config = match path {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    if let Some(data) = data {
        config.data_file = data;
    }
    if let Some(port) = port {
        config.port = port;
    }
    config.validate()?;

    Ok(config)
}

/// Load the store and serve until the process exits
pub fn serve(config: ServerConfig) -> CliResult<()> {
    let store = RecordStore::load(&config.data_file).map_err(|e| {
        error!(error = %e, "failed to load todo data");
        e
    })?;
    let store = Arc::new(store);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let server = HttpServer::with_config(config, store);
        info!(addr = %server.socket_addr(), "starting todo-query server");
        server.start().await
    })?;

    Ok(())
}

/// One-shot list query over a data file
pub fn query(data: &Path, params: Vec<(String, String)>) -> CliResult<Vec<Todo>> {
    let store = RecordStore::load(data)?;
    let query = TodoQuery::from_pairs(params)?;
    Ok(QueryEngine::execute(store.all(), &query))
}
