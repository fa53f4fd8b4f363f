//! Session client against a mocked `/session` resource

use blog_identity::{IdentityError, SessionClient, SessionEndpoint};

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

#[tokio::test]
async fn test_current_uid_without_session_is_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": "NOT_FOUND",
            "message": "No active session"
        })))
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(&mock_server.uri()).unwrap();

    assert_eq!(client.current_uid().await.unwrap(), None);
}

#[tokio::test]
async fn test_current_uid_with_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uid": "abc123" })))
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(&mock_server.uri()).unwrap();

    assert_eq!(
        client.current_uid().await.unwrap().as_deref(),
        Some("abc123")
    );
}

#[tokio::test]
async fn test_establish_posts_uid_and_replays_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .and(body_json(json!({ "uid": "abc123" })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "session_uid=sealed-value; Path=/; HttpOnly")
                .set_body_json(json!({ "message": "Session established" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .and(header("cookie", "session_uid=sealed-value"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "uid": "abc123" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Trailing slash is tolerated
    let client = SessionClient::new(&format!("{}/", mock_server.uri())).unwrap();

    client.establish("abc123").await.unwrap();
    let uid = client.current_uid().await.unwrap();

    assert_eq!(uid.as_deref(), Some("abc123"));
}

#[tokio::test]
async fn test_establish_rejected_surfaces_server_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": "VALIDATION_ERROR",
            "message": "uid is required",
            "field": "uid"
        })))
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(&mock_server.uri()).unwrap();
    let err = client.establish("").await.unwrap_err();

    match err {
        IdentityError::SessionEndpoint { message, .. } => {
            assert!(message.contains("400"), "message: {message}");
            assert!(message.contains("VALIDATION_ERROR"), "message: {message}");
        }
        other => panic!("Expected SessionEndpoint error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_end_deletes_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Session cleared" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(&mock_server.uri()).unwrap();

    client.end().await.unwrap();
}

#[tokio::test]
async fn test_unreachable_server_is_session_endpoint_error() {
    let client = SessionClient::new("http://127.0.0.1:1").unwrap();

    let err = client.current_uid().await.unwrap_err();

    assert!(matches!(err, IdentityError::SessionEndpoint { .. }));
    assert_eq!(err.user_message(), "Could not reach the session service.");
}
