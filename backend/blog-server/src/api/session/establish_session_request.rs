use serde::Deserialize;

/// `POST /session` body. `uid` stays optional so `{}` reaches the handler
/// and gets a field-level error.
#[derive(Debug, Deserialize)]
pub struct EstablishSessionRequest {
    pub uid: Option<String>,
}
