use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDP_BASE_URL, DEFAULT_IDP_ENABLED,
    DEFAULT_IDP_REQUEST_URI,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct IdentityProviderConfig {
    pub enabled: bool,
    pub base_url: String,
    pub api_key: Option<String>,
    /// `requestUri` sent with federated sign-in
    pub request_uri: String,
}

impl Default for IdentityProviderConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_IDP_ENABLED,
            base_url: String::from(DEFAULT_IDP_BASE_URL),
            api_key: None,
            request_uri: String::from(DEFAULT_IDP_REQUEST_URI),
        }
    }
}

impl IdentityProviderConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.base_url) {
            return Err(ConfigError::identity_provider(format!(
                "identity_provider.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::identity_provider(
                "identity_provider.api_key is required when identity_provider.enabled = true",
            )),
        }
    }
}

pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

impl std::fmt::Debug for IdentityProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityProviderConfig")
            .field("enabled", &self.enabled)
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_uri", &self.request_uri)
            .finish()
    }
}
