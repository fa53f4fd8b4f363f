//! Login, logout and rehydration orchestration.
//!
//! Every error returned from here is a flow-boundary error: callers show
//! `IdentityError::user_message()` and leave the client state as it was.

use crate::{
    ClientStateStore, FileLocalStorage, IdentityError, IdentitySynchronizer, ProfileEditor,
    ProjectionReport, Result as IdentityErrorResult, SessionClient, SessionProjector, UID_KEY,
};

use blog_auth::{
    CredentialResolver, IdentityToolkitClient, IdentityToolkitConfig, LoginMethod,
    VerifiedCredential,
};
use blog_config::Config;
use blog_core::{ProfilePatch, UserIdentity, validate_uid};
use blog_db::{DocumentStore, UserRepository};

use std::sync::Arc;

use log::{info, warn};

#[derive(Debug)]
pub struct LoginOutcome {
    pub identity: UserIdentity,
    pub report: ProjectionReport,
}

#[derive(Debug, Default)]
pub struct LogoutReport {
    pub provider_error: Option<IdentityError>,
    pub projection: ProjectionReport,
}

impl LogoutReport {
    pub fn is_complete(&self) -> bool {
        self.provider_error.is_none() && self.projection.is_complete()
    }
}

pub struct IdentityFlow {
    resolver: CredentialResolver,
    synchronizer: IdentitySynchronizer,
    projector: SessionProjector,
    profile_editor: ProfileEditor,
}

impl IdentityFlow {
    pub fn new(
        resolver: CredentialResolver,
        users: UserRepository,
        projector: SessionProjector,
    ) -> Self {
        let profile_editor = ProfileEditor::new(users.clone(), projector.state().clone());
        Self {
            resolver,
            synchronizer: IdentitySynchronizer::new(users),
            projector,
            profile_editor,
        }
    }

    /// Wire the HTTP provider client, session client and file-backed local
    /// storage described by `config`
    pub fn from_config(
        config: &Config,
        store: Arc<dyn DocumentStore>,
        state: Arc<dyn ClientStateStore>,
    ) -> IdentityErrorResult<Self> {
        let idp = &config.identity_provider;
        if !idp.enabled {
            return Err(IdentityError::validation(
                "identity provider is disabled",
                Some("identity_provider.enabled"),
            ));
        }
        let api_key = idp.api_key.as_deref().ok_or_else(|| {
            IdentityError::validation(
                "identity provider api key is not configured",
                Some("identity_provider.api_key"),
            )
        })?;

        let mut toolkit = IdentityToolkitConfig::new(&idp.base_url, api_key);
        toolkit.request_uri = idp.request_uri.clone();

        let local_storage_path = config.local_storage_path().map_err(|e| {
            IdentityError::local_storage(format!("cannot resolve local storage path: {e}"))
        })?;

        let resolver = CredentialResolver::new(Arc::new(IdentityToolkitClient::new(toolkit)));
        let projector = SessionProjector::new(
            state,
            Arc::new(FileLocalStorage::new(local_storage_path)),
            Arc::new(SessionClient::new(&config.client.session_endpoint_url)?),
        );

        Ok(Self::new(resolver, UserRepository::new(store), projector))
    }

    pub fn state(&self) -> &Arc<dyn ClientStateStore> {
        self.projector.state()
    }

    pub fn profile_editor(&self) -> &ProfileEditor {
        &self.profile_editor
    }

    /// Resolve, synchronize, project. Nothing is written to the client state
    /// unless the first two steps succeed.
    pub async fn login(&self, method: &LoginMethod) -> IdentityErrorResult<LoginOutcome> {
        let credential = self.resolver.resolve(method).await?;
        let identity = self.synchronizer.synchronize(&credential).await?;
        let report = self.projector.project(identity.clone()).await;

        info!("Login completed for {} via {}", identity.uid, method.name());
        Ok(LoginOutcome { identity, report })
    }

    /// Clears client state, provider session, local storage and the session
    /// cookie. Each step runs regardless of the others.
    pub async fn logout(&self) -> LogoutReport {
        let projection = self.projector.clear().await;

        let provider_error = match self.resolver.sign_out().await {
            Ok(()) => None,
            Err(e) => {
                warn!("Provider sign-out failed: {e}");
                Some(IdentityError::from(e))
            }
        };

        info!("Logout completed");
        LogoutReport {
            provider_error,
            projection,
        }
    }

    /// Restore the signed-in user after a restart.
    ///
    /// Local storage is consulted first, then the session endpoint.
    pub async fn rehydrate(&self) -> IdentityErrorResult<Option<UserIdentity>> {
        let stored = match self.projector.storage().get(UID_KEY).await {
            Ok(uid) => uid.filter(|uid| !uid.is_empty()),
            Err(e) => {
                warn!("Local storage unreadable during rehydration: {e}");
                None
            }
        };

        let uid = match stored {
            Some(uid) => uid,
            None => match self.projector.endpoint().current_uid().await? {
                Some(uid) => {
                    if let Err(e) = self.projector.storage().set(UID_KEY, &uid).await {
                        warn!("Failed to persist rehydrated uid {uid}: {e}");
                    }
                    uid
                }
                None => return Ok(None),
            },
        };

        validate_uid(&uid)?;
        let identity = self
            .synchronizer
            .synchronize(&VerifiedCredential { uid, email: None })
            .await?;
        self.state().set(identity.clone());

        info!("Rehydrated session for {}", identity.uid);
        Ok(Some(identity))
    }

    pub async fn update_profile(
        &self,
        uid: &str,
        patch: &ProfilePatch,
    ) -> IdentityErrorResult<()> {
        self.profile_editor.update_profile(uid, patch).await
    }
}
