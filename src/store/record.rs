//! Todo record type

use serde::{Deserialize, Serialize};

/// A single todo item.
///
/// Field names on the wire follow the source document: the identifier is
/// `_id` and completion is `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub owner: String,
    /// `true` when complete
    pub status: bool,
    pub body: String,
    pub category: String,
}

impl Todo {
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        status: bool,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            status,
            body: body.into(),
            category: category.into(),
        }
    }
}
