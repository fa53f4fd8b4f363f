use crate::{DbError, Document, DocumentStore, Result as DbErrorResult};

use blog_core::{ProfilePatch, USERS_COLLECTION, UserIdentity};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use serde::Serialize;
use serde_json::Value;

/// Typed access to the `users` collection
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    pub async fn find(&self, uid: &str) -> DbErrorResult<Option<UserIdentity>> {
        let Some(document) = self.store.get(USERS_COLLECTION, uid).await? else {
            return Ok(None);
        };

        let identity: UserIdentity =
            serde_json::from_value(Value::Object(document)).map_err(|e| {
                DbError::InvalidDocument {
                    collection: USERS_COLLECTION.to_string(),
                    id: uid.to_string(),
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        Ok(Some(identity))
    }

    /// Returns `true` if the document was created by this call
    pub async fn create_if_absent(&self, identity: &UserIdentity) -> DbErrorResult<bool> {
        let document = to_document(&identity.uid, identity)?;
        self.store
            .create_if_absent(USERS_COLLECTION, &identity.uid, &document)
            .await
    }

    /// Overwrite the whole document
    pub async fn save(&self, identity: &UserIdentity) -> DbErrorResult<()> {
        let document = to_document(&identity.uid, identity)?;
        self.store
            .set(USERS_COLLECTION, &identity.uid, &document)
            .await
    }

    pub async fn update_profile(&self, uid: &str, patch: &ProfilePatch) -> DbErrorResult<()> {
        let fields = to_document(uid, patch)?;
        self.store
            .update_fields(USERS_COLLECTION, uid, &fields)
            .await
    }
}

fn to_document<T: Serialize>(id: &str, value: &T) -> DbErrorResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Err(DbError::InvalidDocument {
            collection: USERS_COLLECTION.to_string(),
            id: id.to_string(),
            message: "value did not serialize to a JSON object".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
