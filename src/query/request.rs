//! # Query Request
//!
//! Parses list-query parameters into a structured request. Validation of
//! `orderBy` and `limit` happens here, before any record is touched.

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};
use super::sorter::SortField;

/// Completion status selected by the `status` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Complete,
    Incomplete,
}

impl StatusFilter {
    /// `incomplete` selects incomplete todos. Any other value selects
    /// complete ones.
    pub fn parse(value: &str) -> Self {
        if value == "incomplete" {
            StatusFilter::Incomplete
        } else {
            StatusFilter::Complete
        }
    }

    /// The `Todo::status` value this filter keeps
    pub fn wanted(&self) -> bool {
        matches!(self, StatusFilter::Complete)
    }
}

/// Structured list query. `None` means the stage is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    pub owner: Option<String>,
    pub category: Option<String>,
    pub contains: Option<String>,
    pub status: Option<StatusFilter>,
    pub order_by: Option<SortField>,
    pub limit: Option<usize>,
}

impl TodoQuery {
    /// Empty query: returns the full set in load order
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `(name, value)` pairs as they appear in the request.
    ///
    /// The first occurrence of a repeated key wins. Unrecognized keys are
    /// ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> QueryResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut first: HashMap<String, String> = HashMap::new();
        for (key, value) in pairs {
            first
                .entry(key.as_ref().to_string())
                .or_insert_with(|| value.as_ref().to_string());
        }
        Self::parse(&first)
    }

    /// Parses a single-valued parameter map.
    ///
    /// Keys are read in pipeline order, so when both `orderBy` and `limit`
    /// are malformed the `orderBy` error is reported.
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        Ok(TodoQuery {
            owner: params.get("owner").cloned(),
            category: params.get("category").cloned(),
            contains: params.get("contains").cloned(),
            status: params.get("status").map(|v| StatusFilter::parse(v)),
            order_by: params.get("orderBy").map(|v| parse_order_by(v)).transpose()?,
            limit: params.get("limit").map(|v| parse_limit(v)).transpose()?,
        })
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn contains(mut self, needle: impl Into<String>) -> Self {
        self.contains = Some(needle.into());
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    pub fn order_by(mut self, field: SortField) -> Self {
        self.order_by = Some(field);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Parse orderBy parameter
fn parse_order_by(value: &str) -> QueryResult<SortField> {
    SortField::parse(value).ok_or_else(|| QueryError::unsortable_field(value))
}

/// Parse limit parameter
fn parse_limit(value: &str) -> QueryResult<usize> {
    value
        .parse()
        .map_err(|_| QueryError::unparsable_limit(value))
}
