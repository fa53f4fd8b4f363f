use crate::{FederatedCredential, FederatedProvider, Result as AuthErrorResult, VerifiedCredential};

use async_trait::async_trait;

/// External credential-auth service
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<VerifiedCredential>;

    async fn sign_in_with_federated(
        &self,
        provider: FederatedProvider,
        credential: &FederatedCredential,
    ) -> AuthErrorResult<VerifiedCredential>;

    /// Drop whatever provider session is held for the current user
    async fn sign_out(&self) -> AuthErrorResult<()>;
}
