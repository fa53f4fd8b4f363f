use crate::{AppState, end_session, establish_session, get_me, get_session, health};

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Session cookie resource
        .route(
            "/session",
            get(get_session)
                .post(establish_session)
                .delete(end_session),
        )
        // Identity behind the session cookie
        .route("/me", get(get_me))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
