use crate::FederatedProvider;

/// How the user chose to sign in
#[derive(Clone)]
pub enum LoginMethod {
    Password { email: String, password: String },
    Federated {
        provider: FederatedProvider,
        credential: FederatedCredential,
    },
}

impl LoginMethod {
    pub fn password(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Password {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn federated(provider: FederatedProvider, credential: FederatedCredential) -> Self {
        Self::Federated {
            provider,
            credential,
        }
    }

    /// Short label for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Password { .. } => "password",
            Self::Federated { provider, .. } => provider.provider_id(),
        }
    }
}

impl std::fmt::Debug for LoginMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Password { email, .. } => f
                .debug_struct("Password")
                .field("email", email)
                .field("password", &"<redacted>")
                .finish(),
            Self::Federated {
                provider,
                credential,
            } => f
                .debug_struct("Federated")
                .field("provider", provider)
                .field("credential", credential)
                .finish(),
        }
    }
}

/// Token(s) returned by the provider popup
#[derive(Clone, Default)]
pub struct FederatedCredential {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
}

impl FederatedCredential {
    pub fn id_token(token: impl Into<String>) -> Self {
        Self {
            id_token: Some(token.into()),
            access_token: None,
        }
    }

    pub fn access_token(token: impl Into<String>) -> Self {
        Self {
            id_token: None,
            access_token: Some(token.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id_token.as_deref().is_none_or(str::is_empty)
            && self.access_token.as_deref().is_none_or(str::is_empty)
    }

    /// Form-encoded `postBody` for `accounts:signInWithIdp`
    pub fn post_body(&self, provider: FederatedProvider) -> String {
        let mut pairs = Vec::new();
        if let Some(token) = &self.id_token {
            pairs.push(format!("id_token={}", urlencoding::encode(token)));
        }
        if let Some(token) = &self.access_token {
            pairs.push(format!("access_token={}", urlencoding::encode(token)));
        }
        pairs.push(format!(
            "providerId={}",
            urlencoding::encode(provider.provider_id())
        ));
        pairs.join("&")
    }
}

impl std::fmt::Debug for FederatedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FederatedCredential")
            .field("id_token", &self.id_token.as_ref().map(|_| "<redacted>"))
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
