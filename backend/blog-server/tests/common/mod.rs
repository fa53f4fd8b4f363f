#![allow(dead_code)]

//! Test infrastructure for blog-server API tests

use blog_db::{MemoryDocumentStore, SqliteDocumentStore, connect_in_memory, migrate};
use blog_server::AppState;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Response, header},
};
use axum_extra::extract::cookie::Key;
use http_body_util::BodyExt;

/// AppState over an in-memory document store and a fresh cookie key
pub fn create_test_app_state() -> AppState {
    AppState::new(Arc::new(MemoryDocumentStore::new()), Key::generate())
}

/// AppState over a migrated in-memory SQLite store
pub async fn create_sqlite_app_state() -> AppState {
    let pool = connect_in_memory()
        .await
        .expect("Failed to create test pool");
    migrate(&pool).await.expect("Failed to run migrations");

    AppState::new(Arc::new(SqliteDocumentStore::new(pool)), Key::generate())
}

/// `name=value` part of the response's Set-Cookie header, ready to send back
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|pair| pair.trim().to_string())
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
