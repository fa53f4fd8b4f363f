use crate::{ApiError, AppState, SESSION_COOKIE};

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::{PrivateCookieJar, cookie::Key};

/// uid carried by a valid `session_uid` cookie; rejects with 401 otherwise
pub struct SessionUid(pub String);

impl FromRequestParts<AppState> for SessionUid {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar: PrivateCookieJar<Key> = PrivateCookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::unauthorized("Session cookie unreadable"))?;

        jar.get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|uid| !uid.is_empty())
            .map(SessionUid)
            .ok_or_else(|| ApiError::unauthorized("No active session"))
    }
}
