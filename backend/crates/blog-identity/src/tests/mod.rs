
use crate::{
    IdentityError, IdentityFlow, InMemoryClientState, LocalStorage, MemoryLocalStorage,
    Result as IdentityErrorResult, SessionEndpoint, SessionProjector,
};

use blog_auth::{
    AuthProvider, CredentialResolver, FederatedCredential, FederatedProvider,
    Result as AuthErrorResult, VerifiedCredential, classify_provider_error,
};
use blog_core::{Role, USERS_COLLECTION, UserIdentity};
use blog_db::{
    DbError, Document, DocumentStore, MemoryDocumentStore, Result as DbErrorResult,
    UserRepository,
};

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

/// Knows one email/password pair; any federated token signs in unless the
/// provider is marked unavailable
#[derive(Default)]
pub(crate) struct FixtureProvider {
    pub sign_outs: AtomicUsize,
    pub unavailable: AtomicBool,
}

impl FixtureProvider {
    /// Rejects federated sign-ins and fails to sign out
    pub fn unavailable() -> Self {
        Self {
            sign_outs: AtomicUsize::new(0),
            unavailable: AtomicBool::new(true),
        }
    }
}

#[async_trait]
impl AuthProvider for FixtureProvider {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<VerifiedCredential> {
        match (email, password) {
            ("ada@example.com", "correct") => Ok(VerifiedCredential {
                uid: "uid-ada".to_string(),
                email: Some(email.to_string()),
            }),
            ("ada@example.com", _) => Err(classify_provider_error("INVALID_PASSWORD")),
            _ => Err(classify_provider_error("EMAIL_NOT_FOUND")),
        }
    }

    async fn sign_in_with_federated(
        &self,
        provider: FederatedProvider,
        _credential: &FederatedCredential,
    ) -> AuthErrorResult<VerifiedCredential> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(classify_provider_error("INVALID_IDP_RESPONSE : token rejected"));
        }
        Ok(VerifiedCredential {
            uid: format!("uid-{}", provider.provider_id()),
            email: None,
        })
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(classify_provider_error("SERVICE_UNAVAILABLE"));
        }
        Ok(())
    }
}

/// In-process stand-in for the `/session` resource
#[derive(Default)]
pub(crate) struct RecordingSessionEndpoint {
    pub uid: Mutex<Option<String>>,
    pub fail: AtomicBool,
}

impl RecordingSessionEndpoint {
    pub fn with_uid(uid: &str) -> Self {
        Self {
            uid: Mutex::new(Some(uid.to_string())),
            fail: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        Self {
            uid: Mutex::new(None),
            fail: AtomicBool::new(true),
        }
    }

    pub fn current(&self) -> Option<String> {
        self.uid.lock().unwrap().clone()
    }

    fn check(&self) -> IdentityErrorResult<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(IdentityError::session_endpoint("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl SessionEndpoint for RecordingSessionEndpoint {
    async fn current_uid(&self) -> IdentityErrorResult<Option<String>> {
        self.check()?;
        Ok(self.current())
    }

    async fn establish(&self, uid: &str) -> IdentityErrorResult<()> {
        self.check()?;
        *self.uid.lock().unwrap() = Some(uid.to_string());
        Ok(())
    }

    async fn end(&self) -> IdentityErrorResult<()> {
        self.check()?;
        *self.uid.lock().unwrap() = None;
        Ok(())
    }
}

pub(crate) struct FailingLocalStorage;

#[async_trait]
impl LocalStorage for FailingLocalStorage {
    async fn get(&self, _key: &str) -> IdentityErrorResult<Option<String>> {
        Err(IdentityError::local_storage("disk full"))
    }

    async fn set(&self, _key: &str, _value: &str) -> IdentityErrorResult<()> {
        Err(IdentityError::local_storage("disk full"))
    }

    async fn remove(&self, _key: &str) -> IdentityErrorResult<()> {
        Err(IdentityError::local_storage("disk full"))
    }
}

/// Every call fails as if the database were unreachable
pub(crate) struct FailingStore;

#[async_trait]
impl DocumentStore for FailingStore {
    async fn get(&self, _collection: &str, _id: &str) -> DbErrorResult<Option<Document>> {
        Err(DbError::from(sqlx::Error::PoolTimedOut))
    }

    async fn set(&self, _collection: &str, _id: &str, _document: &Document) -> DbErrorResult<()> {
        Err(DbError::from(sqlx::Error::PoolTimedOut))
    }

    async fn create_if_absent(
        &self,
        _collection: &str,
        _id: &str,
        _document: &Document,
    ) -> DbErrorResult<bool> {
        Err(DbError::from(sqlx::Error::PoolTimedOut))
    }

    async fn update_fields(
        &self,
        _collection: &str,
        _id: &str,
        _fields: &Document,
    ) -> DbErrorResult<()> {
        Err(DbError::from(sqlx::Error::PoolTimedOut))
    }
}

/// Hides the document from the first read, as if another client created it
/// between our lookup and our create
pub(crate) struct RacingStore {
    pub inner: MemoryDocumentStore,
    pub hidden_reads: AtomicUsize,
}

#[async_trait]
impl DocumentStore for RacingStore {
    async fn get(&self, collection: &str, id: &str) -> DbErrorResult<Option<Document>> {
        if self.hidden_reads.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(None);
        }
        self.inner.get(collection, id).await
    }

    async fn set(&self, collection: &str, id: &str, document: &Document) -> DbErrorResult<()> {
        self.inner.set(collection, id, document).await
    }

    async fn create_if_absent(
        &self,
        collection: &str,
        id: &str,
        document: &Document,
    ) -> DbErrorResult<bool> {
        self.inner.create_if_absent(collection, id, document).await
    }

    async fn update_fields(
        &self,
        collection: &str,
        id: &str,
        fields: &Document,
    ) -> DbErrorResult<()> {
        self.inner.update_fields(collection, id, fields).await
    }
}

/// Everything a flow test needs to inspect afterwards
pub(crate) struct Harness {
    pub flow: IdentityFlow,
    pub store: Arc<MemoryDocumentStore>,
    pub users: UserRepository,
    pub state: Arc<InMemoryClientState>,
    pub storage: Arc<MemoryLocalStorage>,
    pub endpoint: Arc<RecordingSessionEndpoint>,
    pub provider: Arc<FixtureProvider>,
}

pub(crate) fn harness() -> Harness {
    harness_with_endpoint(RecordingSessionEndpoint::default())
}

pub(crate) fn harness_with_endpoint(endpoint: RecordingSessionEndpoint) -> Harness {
    harness_with(endpoint, FixtureProvider::default())
}

pub(crate) fn harness_with(
    endpoint: RecordingSessionEndpoint,
    provider: FixtureProvider,
) -> Harness {
    let store = Arc::new(MemoryDocumentStore::new());
    let users = UserRepository::new(store.clone());
    let state = Arc::new(InMemoryClientState::new());
    let storage = Arc::new(MemoryLocalStorage::new());
    let endpoint = Arc::new(endpoint);
    let provider = Arc::new(provider);

    let projector = SessionProjector::new(state.clone(), storage.clone(), endpoint.clone());
    let flow = IdentityFlow::new(
        CredentialResolver::new(provider.clone()),
        users.clone(),
        projector,
    );

    Harness {
        flow,
        store,
        users,
        state,
        storage,
        endpoint,
        provider,
    }
}

/// Stored identity with a fixed creation time and a few profile fields
pub(crate) fn stored_identity(uid: &str, role: Role) -> UserIdentity {
    let mut identity = UserIdentity::new_default(uid, Some(format!("{uid}@example.com")));
    identity.role = role;
    identity.username = Some(format!("{uid}-name"));
    identity.created_at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    identity
}

pub(crate) async fn users_count(store: &MemoryDocumentStore) -> usize {
    store.count(USERS_COLLECTION).await
}
