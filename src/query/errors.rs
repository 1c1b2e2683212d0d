//! Query error types
//!
//! Query errors are request-scoped. They never affect the record set or
//! other requests.

use thiserror::Error;

/// Rejected query parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Malformed `limit` or unrecognized `orderBy`
    #[error("{0}")]
    InvalidQuery(String),
}

impl QueryError {
    pub fn unparsable_limit(value: &str) -> Self {
        QueryError::InvalidQuery(format!(
            "Specified limit '{}' can't be parsed to an integer",
            value
        ))
    }

    pub fn unsortable_field(value: &str) -> Self {
        QueryError::InvalidQuery(format!(
            "Specified orderBy '{}' has nothing to sort",
            value
        ))
    }

    /// Returns the human-readable message
    pub fn message(&self) -> &str {
        match self {
            QueryError::InvalidQuery(message) => message,
        }
    }
}

/// Result type for query construction
pub type QueryResult<T> = Result<T, QueryError>;
