//! In-memory record store
//!
//! Reads the todo document once and answers identifier lookups over it.
//! Load order is preserved and the sequence is never reordered in place.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use super::errors::{LoadError, LoadResult};
use super::record::Todo;

/// Immutable ordered set of todo records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    todos: Vec<Todo>,
}

impl RecordStore {
    /// Loads the store from a JSON document on disk.
    ///
    /// Failure here is fatal for startup.
    pub fn load(path: &Path) -> LoadResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_json(&content)?;
        info!(path = %path.display(), todos = store.len(), "loaded todo data");
        Ok(store)
    }

    /// Parses a JSON array of todo records.
    pub fn from_json(content: &str) -> LoadResult<Self> {
        let todos: Vec<Todo> = serde_json::from_str(content)?;
        Self::from_records(todos)
    }

    /// Builds the store from already-deserialized records.
    pub fn from_records(todos: Vec<Todo>) -> LoadResult<Self> {
        let mut seen = HashSet::with_capacity(todos.len());
        for todo in &todos {
            if !seen.insert(todo.id.as_str()) {
                return Err(LoadError::DuplicateId(todo.id.clone()));
            }
        }

        Ok(Self { todos })
    }

    /// Returns the first record whose id equals `id`.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Returns every record in load order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"[
            {"_id": "a", "owner": "Fry", "status": true, "body": "one", "category": "homework"},
            {"_id": "b", "owner": "Blanche", "status": false, "body": "two", "category": "groceries"}
        ]"#
    }

    #[test]
    fn test_from_json_preserves_order() {
        let store = RecordStore::from_json(sample_json()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id, "a");
        assert_eq!(store.all()[1].id, "b");
    }

    #[test]
    fn test_get_found_and_missing() {
        let store = RecordStore::from_json(sample_json()).unwrap();
        assert_eq!(store.get("b").map(|t| t.owner.as_str()), Some("Blanche"));
        assert!(store.get("doesNotExist").is_none());
    }

    #[test]
    fn test_get_is_deterministic() {
        let store = RecordStore::from_json(sample_json()).unwrap();
        for _ in 0..10 {
            assert_eq!(store.get("a"), store.get("a"));
        }
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let todos = vec![
            Todo::new("x", "Fry", true, "one", "homework"),
            Todo::new("x", "Barry", false, "two", "homework"),
        ];
        let err = RecordStore::from_records(todos).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "x"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = RecordStore::from_json(r#"{"_id": "not an array"}"#).unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(sample_json().as_bytes()).unwrap();

        let store = RecordStore::load(file.path()).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = RecordStore::load(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_empty_array_is_empty_store() {
        let store = RecordStore::from_json("[]").unwrap();
        assert!(store.is_empty());
    }
}
