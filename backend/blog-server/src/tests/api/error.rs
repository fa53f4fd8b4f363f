use crate::ApiError;

use blog_core::validate_uid;
use blog_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let (status, json) = body_json(ApiError::not_found("No active session")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "No active session");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("uid is required", "uid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "uid");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("No active session")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
}

#[test]
fn test_db_not_found_converts_to_not_found() {
    let error = ApiError::from(DbError::NotFound {
        collection: "users".into(),
        id: "u1".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert!(matches!(error, ApiError::NotFound { .. }));
}

#[test]
fn test_db_failure_converts_to_internal_without_details() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    match error {
        ApiError::Internal { message, .. } => {
            assert_eq!(message, "Database operation failed");
        }
        other => panic!("Expected Internal, got {other:?}"),
    }
}

#[test]
fn test_uid_validation_converts_to_validation_on_uid_field() {
    let error = ApiError::from(validate_uid(&"x".repeat(200)).unwrap_err());

    assert!(matches!(
        error,
        ApiError::Validation { field: Some(ref f), .. } if f == "uid"
    ));
}
