//! Document store abstraction
//!
//! Records are schemaless JSON objects addressed by `(collection, id)`.

use crate::Result as DbErrorResult;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub type Document = Map<String, Value>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document by id
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>>;

    /// Create or fully replace a document
    async fn set(&self, collection: &str, id: &str, document: &Document) -> DbErrorResult<()>;

    /// Write the document only if no document with this id exists yet.
    ///
    /// Returns `true` when this call created it.
    async fn create_if_absent(
        &self,
        collection: &str,
        id: &str,
        document: &Document,
    ) -> DbErrorResult<bool>;

    /// Merge `fields` into an existing document (JSON merge patch: a `null`
    /// value removes the key). Fails with `DbError::NotFound` if absent.
    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Document,
    ) -> DbErrorResult<()>;
}

/// Apply a JSON merge patch (RFC 7396) to `target`
pub fn merge_patch(target: &mut Document, patch: &Document) {
    for (key, value) in patch {
        match value {
            Value::Null => {
                target.remove(key);
            }
            Value::Object(nested) => {
                let entry = target
                    .entry(key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !entry.is_object() {
                    *entry = Value::Object(Map::new());
                }
                if let Value::Object(existing) = entry {
                    merge_patch(existing, nested);
                }
            }
            other => {
                target.insert(key.clone(), other.clone());
            }
        }
    }
}
