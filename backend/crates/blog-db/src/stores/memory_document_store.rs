use crate::{DbError, Document, DocumentStore, Result as DbErrorResult, merge_patch};

use std::collections::HashMap;
use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use tokio::sync::RwLock;

/// Process-local document store
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), Document>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in a collection
    pub async fn count(&self, collection: &str) -> usize {
        self.documents
            .read()
            .await
            .keys()
            .filter(|(c, _)| c == collection)
            .count()
    }
}

fn key(collection: &str, id: &str) -> (String, String) {
    (collection.to_string(), id.to_string())
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>> {
        Ok(self.documents.read().await.get(&key(collection, id)).cloned())
    }

    async fn set(&self, collection: &str, id: &str, document: &Document) -> DbErrorResult<()> {
        self.documents
            .write()
            .await
            .insert(key(collection, id), document.clone());
        Ok(())
    }

    async fn create_if_absent(
        &self,
        collection: &str,
        id: &str,
        document: &Document,
    ) -> DbErrorResult<bool> {
        let mut documents = self.documents.write().await;
        let k = key(collection, id);
        if documents.contains_key(&k) {
            return Ok(false);
        }
        documents.insert(k, document.clone());
        Ok(true)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Document,
    ) -> DbErrorResult<()> {
        let mut documents = self.documents.write().await;
        let existing = documents
            .get_mut(&key(collection, id))
            .ok_or_else(|| DbError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        merge_patch(existing, fields);
        Ok(())
    }
}
