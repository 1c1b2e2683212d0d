//! Load-time error types
//!
//! Every variant is fatal: the service cannot start without its record set.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build the record store from its source document
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source document could not be read
    #[error("Failed to read todo data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source document is not a JSON array of todo records
    #[error("Malformed todo data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two records share the same identifier
    #[error("Duplicate todo id: {0}")]
    DuplicateId(String),
}

/// Result type for store loading
pub type LoadResult<T> = Result<T, LoadError>;
