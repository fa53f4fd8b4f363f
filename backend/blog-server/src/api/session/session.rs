//! `/session`: the browser session cookie mapping to a uid

use crate::api::error::json_rejection;
use crate::{
    ApiError, ApiResult, AppState, EstablishSessionRequest, MessageResponse, SessionResponse,
};

use blog_core::validate_uid;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, Key},
};
use log::{debug, info};

/// Encrypted with the server's cookie key
pub const SESSION_COOKIE: &str = "session_uid";

/// Path=/ and HttpOnly; no Max-Age, so it lasts for the browser session
fn session_cookie(uid: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, uid))
        .path("/")
        .http_only(true)
        .build()
}

/// GET /session
pub async fn get_session(
    State(state): State<AppState>,
    jar: PrivateCookieJar<Key>,
) -> ApiResult<Json<SessionResponse>> {
    // Cookies that fail to decrypt are dropped by the jar
    let uid = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|uid| !uid.is_empty());

    state.metrics.session_lookup(uid.is_some());

    match uid {
        Some(uid) => Ok(Json(SessionResponse { uid })),
        None => Err(ApiError::not_found("No active session")),
    }
}

/// POST /session
pub async fn establish_session(
    State(state): State<AppState>,
    jar: PrivateCookieJar<Key>,
    payload: Result<Json<EstablishSessionRequest>, JsonRejection>,
) -> ApiResult<(PrivateCookieJar<Key>, Json<MessageResponse>)> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            state.metrics.validation_failed("uid");
            return Err(json_rejection(rejection, "uid"));
        }
    };

    let uid = match request.uid {
        Some(uid) if !uid.trim().is_empty() => uid,
        _ => {
            state.metrics.validation_failed("uid");
            return Err(ApiError::validation("uid is required", "uid"));
        }
    };

    if let Err(e) = validate_uid(&uid) {
        state.metrics.validation_failed("uid");
        return Err(e.into());
    }

    info!("Session established for {uid}");
    state.metrics.session_established();

    Ok((
        jar.add(session_cookie(uid)),
        Json(MessageResponse::new("Session established")),
    ))
}

/// DELETE /session
pub async fn end_session(
    State(state): State<AppState>,
    jar: PrivateCookieJar<Key>,
) -> (PrivateCookieJar<Key>, Json<MessageResponse>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        debug!("Session cleared for {}", cookie.value());
    }
    state.metrics.session_cleared();

    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Json(MessageResponse::new("Session cleared")),
    )
}
