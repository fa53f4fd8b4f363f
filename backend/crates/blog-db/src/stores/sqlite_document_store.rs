use crate::{DbError, Document, DocumentStore, Result as DbErrorResult};

use std::panic::Location;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use serde_json::Value;
use sqlx::{Row, SqlitePool};

/// Document store backed by the `documents` table.
///
/// Bodies are stored as JSON text; field updates use SQLite's `json_patch`
/// so a merge is a single statement.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn parse_body(collection: &str, id: &str, body: &str) -> DbErrorResult<Document> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(DbError::InvalidDocument {
            collection: collection.to_string(),
            id: id.to_string(),
            message: format!("expected a JSON object, found {other}"),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>> {
        let row = sqlx::query("SELECT body FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let body: String = row.try_get("body")?;
                Ok(Some(parse_body(collection, id, &body)?))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, collection: &str, id: &str, document: &Document) -> DbErrorResult<()> {
        let body = serde_json::to_string(document)?;
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
              INSERT INTO documents (collection, id, body, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT (collection, id)
              DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at
              "#,
        )
        .bind(collection)
        .bind(id)
        .bind(body)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn create_if_absent(
        &self,
        collection: &str,
        id: &str,
        document: &Document,
    ) -> DbErrorResult<bool> {
        let body = serde_json::to_string(document)?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              INSERT OR IGNORE INTO documents (collection, id, body, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(collection)
        .bind(id)
        .bind(body)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Document,
    ) -> DbErrorResult<()> {
        let patch = serde_json::to_string(fields)?;
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
              UPDATE documents
              SET body = json_patch(body, ?), updated_at = ?
              WHERE collection = ? AND id = ?
              "#,
        )
        .bind(patch)
        .bind(now)
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
