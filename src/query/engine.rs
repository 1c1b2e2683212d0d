//! Query execution
//!
//! Stateless: every call is a pure function of (records, query). The input
//! slice is never modified; results are a freshly built `Vec`.

use tracing::debug;

use crate::store::Todo;

use super::filters::TodoFilter;
use super::request::TodoQuery;
use super::sorter::TodoSorter;

/// Runs the filter → sort → limit pipeline
pub struct QueryEngine;

impl QueryEngine {
    /// Executes `query` over `records`.
    ///
    /// # Execution Steps
    ///
    /// 1. Apply each active filter in pipeline order
    /// 2. Sort by `order_by` (stable, ascending)
    /// 3. Keep at most `limit` records from the front
    pub fn execute(records: &[Todo], query: &TodoQuery) -> Vec<Todo> {
        let mut results: Vec<Todo> = records.to_vec();

        for filter in TodoFilter::stages(query) {
            results.retain(|todo| filter.matches(todo));
            debug!(stage = filter.name(), remaining = results.len(), "filter applied");
        }

        if let Some(field) = query.order_by {
            TodoSorter::sort(&mut results, field);
            debug!(stage = "orderBy", field = field.as_str(), "sort applied");
        }

        if let Some(limit) = query.limit {
            results.truncate(limit);
            debug!(stage = "limit", limit, remaining = results.len(), "limit applied");
        }

        results
    }
}
