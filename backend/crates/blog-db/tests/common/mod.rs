#![allow(dead_code)]

use blog_core::UserIdentity;
use blog_db::{SqliteDocumentStore, connect_in_memory, migrate};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");

    migrate(&pool).await.expect("Failed to run migrations");

    pool
}

pub async fn create_test_store() -> SqliteDocumentStore {
    SqliteDocumentStore::new(create_test_pool().await)
}

pub fn create_test_identity(uid: &str) -> UserIdentity {
    let mut identity = UserIdentity::new_default(uid, Some(format!("{uid}@example.com")));
    identity.username = Some(format!("user-{uid}"));
    identity.bio = Some("Writes about Rust".to_string());
    identity
}
