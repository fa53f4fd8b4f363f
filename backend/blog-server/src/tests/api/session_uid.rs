use crate::{ApiError, AppState, SessionUid};

use blog_db::MemoryDocumentStore;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use axum_extra::extract::cookie::Key;

fn create_test_state() -> AppState {
    AppState::new(Arc::new(MemoryDocumentStore::new()), Key::generate())
}

#[tokio::test]
async fn test_extractor_without_cookie_is_unauthorized() {
    let state = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = SessionUid::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_unencrypted_cookie_is_unauthorized() {
    let state = create_test_state();
    let request = Request::builder()
        .header("cookie", "session_uid=plain-uid")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = SessionUid::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
