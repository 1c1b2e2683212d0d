//! CLI argument definitions using clap
//!
//! Commands:
//! - todo-query serve [--config <path>] [--data <path>] [--port <port>]
//! - todo-query query --data <path> [--param key=value]...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// todo-query - read-only HTTP query service over a todo collection
#[derive(Parser, Debug)]
#[command(name = "todo-query")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults are used when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Todo JSON document, overrides the config file
        #[arg(long)]
        data: Option<PathBuf>,

        /// Port to bind, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Execute a single list query and exit
    Query {
        /// Todo JSON document
        #[arg(long, default_value = "data/todos.json")]
        data: PathBuf,

        /// Query parameter as key=value, e.g. --param owner=Fry
        #[arg(long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

/// Split `key=value`. The value may itself contain `=`.
fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}
