//! Record store for todo-query
//!
//! Holds the immutable, ordered set of todo records loaded once at startup.
//!
//! # Lifecycle
//!
//! 1. Read the source document from disk
//! 2. Deserialize a JSON array of records
//! 3. Reject duplicate identifiers
//! 4. Serve lookups and full scans until process exit
//!
//! The store is never mutated after construction. Share it behind an `Arc`.

mod errors;
mod record;
mod record_store;

pub use errors::{LoadError, LoadResult};
pub use record::Todo;
pub use record_store::RecordStore;
