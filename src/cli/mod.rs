//! CLI module for todo-query
//!
//! Provides command-line interface for:
//! - serve: Load the todo data and start the HTTP server
//! - query: One-shot list query printed as JSON

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{query, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliResult};
pub use io::write_todos;
