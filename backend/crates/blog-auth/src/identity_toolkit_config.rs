pub const DEFAULT_IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_REQUEST_URI: &str = "http://localhost";

/// Connection settings for the identity toolkit REST API
#[derive(Debug, Clone)]
pub struct IdentityToolkitConfig {
    /// Base URL without trailing slash
    pub base_url: String,
    pub api_key: String,
    /// `requestUri` sent with federated sign-in
    pub request_uri: String,
}

impl IdentityToolkitConfig {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            request_uri: DEFAULT_REQUEST_URI.to_string(),
        }
    }
}

impl Default for IdentityToolkitConfig {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY_TOOLKIT_URL, "")
    }
}
