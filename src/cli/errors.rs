//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit status.

use std::io;

use thiserror::Error;

use crate::http_server::ConfigError;
use crate::query::QueryError;
use crate::store::LoadError;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Startup failed: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid query: {0}")]
    Query(#[from] QueryError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_display() {
        let err = CliError::from(QueryError::unparsable_limit("x"));
        assert_eq!(
            err.to_string(),
            "Invalid query: Specified limit 'x' can't be parsed to an integer"
        );
    }
}
