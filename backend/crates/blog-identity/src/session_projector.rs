use crate::{ClientStateStore, IdentityError, LocalStorage, SessionEndpoint, UID_KEY};

use blog_core::UserIdentity;

use std::sync::Arc;

use log::{info, warn};

/// Outcome of the best-effort side effects of projecting or clearing a session
#[derive(Debug, Default)]
pub struct ProjectionReport {
    pub local_storage_error: Option<IdentityError>,
    pub session_error: Option<IdentityError>,
}

impl ProjectionReport {
    pub fn local_storage_persisted(&self) -> bool {
        self.local_storage_error.is_none()
    }

    pub fn session_issued(&self) -> bool {
        self.session_error.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.local_storage_persisted() && self.session_issued()
    }
}

/// Pushes a resolved identity out to every place the client keeps it
#[derive(Clone)]
pub struct SessionProjector {
    state: Arc<dyn ClientStateStore>,
    storage: Arc<dyn LocalStorage>,
    endpoint: Arc<dyn SessionEndpoint>,
}

impl SessionProjector {
    pub fn new(
        state: Arc<dyn ClientStateStore>,
        storage: Arc<dyn LocalStorage>,
        endpoint: Arc<dyn SessionEndpoint>,
    ) -> Self {
        Self {
            state,
            storage,
            endpoint,
        }
    }

    pub fn state(&self) -> &Arc<dyn ClientStateStore> {
        &self.state
    }

    pub fn storage(&self) -> &Arc<dyn LocalStorage> {
        &self.storage
    }

    pub fn endpoint(&self) -> &Arc<dyn SessionEndpoint> {
        &self.endpoint
    }

    /// Client state first, then local storage, then the session cookie.
    /// Later steps run even when an earlier one fails.
    pub async fn project(&self, identity: UserIdentity) -> ProjectionReport {
        let uid = identity.uid.clone();
        self.state.set(identity);

        let mut report = ProjectionReport::default();

        if let Err(e) = self.storage.set(UID_KEY, &uid).await {
            warn!("Failed to persist uid {uid} to local storage: {e}");
            report.local_storage_error = Some(e);
        }

        if let Err(e) = self.endpoint.establish(&uid).await {
            warn!("Failed to issue session cookie for {uid}: {e}");
            report.session_error = Some(e);
        }

        info!(
            "Projected session for {uid} (local storage: {}, cookie: {})",
            report.local_storage_persisted(),
            report.session_issued()
        );
        report
    }

    /// Inverse of `project`, with the same best-effort semantics
    pub async fn clear(&self) -> ProjectionReport {
        self.state.clear();

        let mut report = ProjectionReport::default();

        if let Err(e) = self.storage.remove(UID_KEY).await {
            warn!("Failed to remove uid from local storage: {e}");
            report.local_storage_error = Some(e);
        }

        if let Err(e) = self.endpoint.end().await {
            warn!("Failed to clear session cookie: {e}");
            report.session_error = Some(e);
        }

        report
    }
}
