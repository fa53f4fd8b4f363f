use crate::{ApiError, ApiResult, AppState, MeResponse, SessionUid};

use axum::{Json, extract::State};

/// GET /me - identity document behind the session cookie
pub async fn get_me(
    State(state): State<AppState>,
    SessionUid(uid): SessionUid,
) -> ApiResult<Json<MeResponse>> {
    let user = state.users.find(&uid).await?;
    state.metrics.identity_lookup(user.is_some());

    user.map(|user| Json(MeResponse { user }))
        .ok_or_else(|| ApiError::not_found(format!("No identity document for {uid}")))
}
