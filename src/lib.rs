//! todo-query - a read-only HTTP query service over an in-memory todo collection
//!
//! The record set is loaded once at startup and never mutated. List queries
//! run a fixed filter → sort → limit pipeline over it.

pub mod cli;
pub mod http_server;
pub mod query;
pub mod store;
