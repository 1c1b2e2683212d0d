//! Todo HTTP Routes
//!
//! Read-only endpoints over the shared record store.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, warn};

use crate::query::{QueryEngine, TodoQuery};
use crate::store::{RecordStore, Todo};

use super::errors::{ApiError, ApiResult};

/// Create todo routes
pub fn todo_routes(store: Arc<RecordStore>) -> Router {
    Router::new()
        .route("/todos", get(list_todos_handler))
        .route("/todos/:id", get(get_todo_handler))
        .with_state(store)
}

/// Single todo lookup
async fn get_todo_handler(
    State(store): State<Arc<RecordStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Todo>> {
    match store.get(&id) {
        Some(todo) => Ok(Json(todo.clone())),
        None => {
            debug!(id = %id, "todo not found");
            Err(ApiError::NotFound(id))
        }
    }
}

/// Filtered list. Pairs keep request order so the first repeated key wins.
async fn list_todos_handler(
    State(store): State<Arc<RecordStore>>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Todo>>> {
    let query = TodoQuery::from_pairs(params).map_err(|e| {
        warn!(error = %e, "rejected todo query");
        ApiError::from(e)
    })?;

    let todos = QueryEngine::execute(store.all(), &query);
    debug!(returned = todos.len(), "todo query complete");
    Ok(Json(todos))
}
