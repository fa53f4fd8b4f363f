pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, ApiErrorBody, Result as ApiResult},
    extractors::session_uid::SessionUid,
    me::{me::get_me, me_response::MeResponse},
    session::{
        establish_session_request::EstablishSessionRequest,
        message_response::MessageResponse,
        session::{SESSION_COOKIE, end_session, establish_session, get_session},
        session_response::SessionResponse,
    },
};
pub use app_state::{AppState, cookie_key};
pub use metrics::SessionMetrics;
pub use routes::build_router;
