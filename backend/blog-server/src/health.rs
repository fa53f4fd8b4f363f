use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

// Any id works, the probe only needs a round trip to the store
const PROBE_COLLECTION: &str = "health";
const PROBE_ID: &str = "readiness";

/// GET /health - JSON status including the document store
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = match state.store.get(PROBE_COLLECTION, PROBE_ID).await {
        Ok(_) => "operational",
        Err(e) => {
            log::warn!("Health check: document store unavailable: {e}");
            "unavailable"
        }
    };

    let health = json!({
        "status": if database == "operational" { "healthy" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "session": "operational",
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - is the process alive?
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - ready once the document store answers
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match state.store.get(PROBE_COLLECTION, PROBE_ID).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {e}");
            (StatusCode::SERVICE_UNAVAILABLE, "Not ready").into_response()
        }
    }
}
