//! Query engine for todo-query
//!
//! Turns the full record sequence into a filtered, sorted and limited view.
//!
//! # Execution Flow (strict order)
//!
//! 1. Owner filter
//! 2. Category filter
//! 3. Contains filter (body substring)
//! 4. Status filter
//! 5. Sort (if specified)
//! 6. Limit
//!
//! Each stage runs only when its parameter is present. Filters compose as AND.
//! The order above is fixed regardless of the order parameters arrive in.

mod engine;
mod errors;
mod filters;
mod request;
mod sorter;

pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
pub use filters::TodoFilter;
pub use request::{StatusFilter, TodoQuery};
pub use sorter::{SortField, TodoSorter};
