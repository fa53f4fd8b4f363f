use crate::{
    AuthError, AuthProvider, LoginMethod, Result as AuthErrorResult, VerifiedCredential,
};

use std::panic::Location;
use std::sync::Arc;

use error_location::ErrorLocation;
use log::{info, warn};

/// Turns a login method into a verified `{uid, email?}`.
///
/// No retries: the caller shows the error and lets the user resubmit.
#[derive(Clone)]
pub struct CredentialResolver {
    provider: Arc<dyn AuthProvider>,
}

impl CredentialResolver {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    pub async fn resolve(&self, method: &LoginMethod) -> AuthErrorResult<VerifiedCredential> {
        let result = match method {
            LoginMethod::Password { email, password } => {
                self.provider.sign_in_with_password(email, password).await
            }
            LoginMethod::Federated {
                provider,
                credential,
            } => {
                if credential.is_empty() {
                    return Err(AuthError::Provider {
                        code: "MISSING_CREDENTIAL".to_string(),
                        message: format!("{provider} popup returned no token"),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
                self.provider
                    .sign_in_with_federated(*provider, credential)
                    .await
            }
        };

        match &result {
            Ok(credential) => info!(
                "Resolved credential for uid {} via {}",
                credential.uid,
                method.name()
            ),
            Err(e) => warn!("Credential resolution via {} failed: {}", method.name(), e),
        }

        result
    }

    pub async fn sign_out(&self) -> AuthErrorResult<()> {
        self.provider.sign_out().await
    }
}
