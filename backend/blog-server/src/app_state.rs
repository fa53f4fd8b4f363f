use crate::SessionMetrics;
use crate::error::{Result as ServerErrorResult, ServerError};

use blog_db::{DocumentStore, UserRepository};

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use log::warn;

/// Shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub users: UserRepository,
    pub cookie_key: Key,
    pub metrics: SessionMetrics,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, cookie_key: Key) -> Self {
        Self {
            users: UserRepository::new(store.clone()),
            store,
            cookie_key,
            metrics: SessionMetrics::new(),
        }
    }
}

// PrivateCookieJar pulls its key out of the state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Cookie key from the configured secret, or a random one that only lives as
/// long as the process
pub fn cookie_key(secret: Option<&str>) -> ServerErrorResult<Key> {
    match secret {
        Some(secret) => Key::try_from(secret.as_bytes()).map_err(|e| ServerError::SessionKey {
            message: e.to_string(),
        }),
        None => {
            warn!("No session secret configured - generated an ephemeral cookie key");
            Ok(Key::generate())
        }
    }
}
