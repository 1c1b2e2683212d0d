//! Result sorting for list queries
//!
//! Sorts ascending by a closed set of fields. Sort is stable: records with
//! equal keys keep their relative input order.

use std::cmp::Ordering;

use crate::store::Todo;

/// Field accepted by the `orderBy` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Owner,
    Status,
    Body,
    Category,
}

impl SortField {
    /// Maps an `orderBy` value to a field. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(SortField::Owner),
            "status" => Some(SortField::Status),
            "body" => Some(SortField::Body),
            "category" => Some(SortField::Category),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Owner => "owner",
            SortField::Status => "status",
            SortField::Body => "body",
            SortField::Category => "category",
        }
    }

    /// Natural ascending order on this field.
    ///
    /// Status orders incomplete (`false`) before complete (`true`).
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            SortField::Owner => a.owner.cmp(&b.owner),
            SortField::Status => a.status.cmp(&b.status),
            SortField::Body => a.body.cmp(&b.body),
            SortField::Category => a.category.cmp(&b.category),
        }
    }
}

/// Sorts todo sequences
pub struct TodoSorter;

impl TodoSorter {
    /// Sorts in place, ascending and stable.
    pub fn sort(todos: &mut [Todo], field: SortField) {
        todos.sort_by(|a, b| field.compare(a, b));
    }
}
