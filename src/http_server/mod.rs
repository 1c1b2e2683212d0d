//! # HTTP Server Module
//!
//! Axum surface over the record store and query engine.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/todos` - Filtered, sorted and limited list
//! - `/todos/:id` - Single todo lookup

pub mod config;
pub mod errors;
pub mod observability_routes;
pub mod server;
pub mod todo_routes;

pub use config::{ConfigError, ServerConfig};
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
