//! Predicate filtering for list queries
//!
//! Exact, case-sensitive matching only. No trimming, no case folding.

use crate::store::Todo;

use super::request::{StatusFilter, TodoQuery};

/// A single filter stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoFilter {
    /// `owner` equals the value
    Owner(String),
    /// `category` equals the value
    Category(String),
    /// `body` contains the value as a substring
    Contains(String),
    /// `status` matches the selected completion state
    Status(StatusFilter),
}

impl TodoFilter {
    /// Returns the active filters of a query in pipeline order:
    /// owner, category, contains, status.
    pub fn stages(query: &TodoQuery) -> Vec<TodoFilter> {
        let mut stages = Vec::with_capacity(4);
        if let Some(owner) = &query.owner {
            stages.push(TodoFilter::Owner(owner.clone()));
        }
        if let Some(category) = &query.category {
            stages.push(TodoFilter::Category(category.clone()));
        }
        if let Some(needle) = &query.contains {
            stages.push(TodoFilter::Contains(needle.clone()));
        }
        if let Some(status) = query.status {
            stages.push(TodoFilter::Status(status));
        }
        stages
    }

    /// Checks if a todo passes this filter
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::Owner(owner) => todo.owner == *owner,
            TodoFilter::Category(category) => todo.category == *category,
            TodoFilter::Contains(needle) => todo.body.contains(needle.as_str()),
            TodoFilter::Status(status) => todo.status == status.wanted(),
        }
    }

    /// Checks if a todo passes all filters (AND semantics)
    pub fn matches_all(todo: &Todo, filters: &[TodoFilter]) -> bool {
        filters.iter().all(|filter| filter.matches(todo))
    }

    /// Stage name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            TodoFilter::Owner(_) => "owner",
            TodoFilter::Category(_) => "category",
            TodoFilter::Contains(_) => "contains",
            TodoFilter::Status(_) => "status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> Todo {
        Todo::new(
            "1",
            "Fry",
            false,
            "Ipsum esse est ullamco",
            "video games",
        )
    }

    #[test]
    fn test_owner_exact_match() {
        assert!(TodoFilter::Owner("Fry".into()).matches(&todo()));
        assert!(!TodoFilter::Owner("fry".into()).matches(&todo()));
        assert!(!TodoFilter::Owner("Fr".into()).matches(&todo()));
    }

    #[test]
    fn test_category_exact_match() {
        assert!(TodoFilter::Category("video games".into()).matches(&todo()));
        assert!(!TodoFilter::Category("video".into()).matches(&todo()));
    }

    #[test]
    fn test_contains_substring() {
        assert!(TodoFilter::Contains("esse".into()).matches(&todo()));
        assert!(TodoFilter::Contains("".into()).matches(&todo()));
        assert!(!TodoFilter::Contains("ipsum".into()).matches(&todo()));
    }

    #[test]
    fn test_status() {
        assert!(TodoFilter::Status(StatusFilter::Incomplete).matches(&todo()));
        assert!(!TodoFilter::Status(StatusFilter::Complete).matches(&todo()));
    }

    #[test]
    fn test_multiple_filters_and() {
        let filters = vec![
            TodoFilter::Owner("Fry".into()),
            TodoFilter::Status(StatusFilter::Incomplete),
        ];
        assert!(TodoFilter::matches_all(&todo(), &filters));

        let filters = vec![
            TodoFilter::Owner("Fry".into()),
            TodoFilter::Category("homework".into()),
        ];
        assert!(!TodoFilter::matches_all(&todo(), &filters));
    }

    #[test]
    fn test_stages_fixed_order() {
        let query = TodoQuery::new()
            .status(StatusFilter::Complete)
            .contains("ex")
            .category("homework")
            .owner("Fry");

        let names: Vec<_> = TodoFilter::stages(&query).iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["owner", "category", "contains", "status"]);
    }

    #[test]
    fn test_no_stages_for_empty_query() {
        assert!(TodoFilter::stages(&TodoQuery::new()).is_empty());
    }
}
