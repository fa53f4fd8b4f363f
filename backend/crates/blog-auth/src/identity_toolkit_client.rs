//! HTTP client for an identity-toolkit style auth provider

use crate::{
    AuthError, AuthProvider, FederatedCredential, FederatedProvider, IdentityToolkitConfig,
    Result as AuthErrorResult, VerifiedCredential, classify_provider_error,
};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, info};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

/// Tokens issued for the signed-in user
#[derive(Clone)]
struct ProviderSession {
    uid: String,
    id_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: Option<String>,
    email: Option<String>,
    id_token: Option<String>,
    #[serde(default)]
    need_confirmation: Option<bool>,
    #[serde(default)]
    error_message: Option<String>,
}

pub struct IdentityToolkitClient {
    config: IdentityToolkitConfig,
    client: ReqwestClient,
    session: RwLock<Option<ProviderSession>>,
}

impl IdentityToolkitClient {
    pub fn new(config: IdentityToolkitConfig) -> Self {
        Self {
            config,
            client: ReqwestClient::new(),
            session: RwLock::new(None),
        }
    }

    /// uid of the user currently signed in through this client
    pub async fn current_uid(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.uid.clone())
    }

    /// Provider-issued id token for the signed-in user
    pub async fn id_token(&self) -> Option<String> {
        self.session
            .read()
            .await
            .as_ref()
            .and_then(|s| s.id_token.clone())
    }

    fn endpoint(&self, operation: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.config.base_url,
            operation,
            urlencoding::encode(&self.config.api_key)
        )
    }

    /// POST a request and decode the provider's success or error payload
    async fn call<B: Serialize>(&self, operation: &str, body: &B) -> AuthErrorResult<SignInResponse> {
        let response = self
            .client
            .post(self.endpoint(operation))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let payload: Value = response.json().await?;

        if !status.is_success() {
            let message = payload
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("UNKNOWN");
            debug!("Identity provider rejected {operation}: {status} {message}");
            return Err(classify_provider_error(message));
        }

        serde_json::from_value(payload).map_err(|e| AuthError::InvalidResponse {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Record the provider session and project the response to a credential
    async fn establish(&self, response: SignInResponse) -> AuthErrorResult<VerifiedCredential> {
        let uid = response
            .local_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AuthError::InvalidResponse {
                message: "response is missing localId".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        *self.session.write().await = Some(ProviderSession {
            uid: uid.clone(),
            id_token: response.id_token,
        });

        Ok(VerifiedCredential {
            uid,
            email: response.email.filter(|e| !e.is_empty()),
        })
    }
}

#[async_trait]
impl AuthProvider for IdentityToolkitClient {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<VerifiedCredential> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct PasswordRequest<'a> {
            email: &'a str,
            password: &'a str,
            return_secure_token: bool,
        }

        let response = self
            .call(
                "signInWithPassword",
                &PasswordRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        self.establish(response).await
    }

    async fn sign_in_with_federated(
        &self,
        provider: FederatedProvider,
        credential: &FederatedCredential,
    ) -> AuthErrorResult<VerifiedCredential> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct IdpRequest<'a> {
            post_body: String,
            request_uri: &'a str,
            return_secure_token: bool,
            return_idp_credential: bool,
        }

        let response = self
            .call(
                "signInWithIdp",
                &IdpRequest {
                    post_body: credential.post_body(provider),
                    request_uri: &self.config.request_uri,
                    return_secure_token: true,
                    return_idp_credential: true,
                },
            )
            .await?;

        if response.need_confirmation == Some(true) {
            return Err(AuthError::Provider {
                code: "ACCOUNT_EXISTS_WITH_DIFFERENT_CREDENTIAL".to_string(),
                message: format!(
                    "An account already exists for this email with a different sign-in method than {provider}"
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if let Some(message) = response.error_message.as_deref() {
            return Err(AuthError::Provider {
                code: message.split(':').next().unwrap_or(message).trim().to_string(),
                message: message.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.establish(response).await
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        if let Some(session) = self.session.write().await.take() {
            info!("Signed out provider session for {}", session.uid);
        }
        Ok(())
    }
}
