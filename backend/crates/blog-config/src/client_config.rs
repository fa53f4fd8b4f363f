use crate::identity_provider_config::is_http_url;
use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_LOCAL_STORAGE_FILENAME, DEFAULT_SESSION_ENDPOINT_URL,
};

use serde::Deserialize;

/// Settings for the client side of the identity flow
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the server exposing `/session`
    pub session_endpoint_url: String,
    /// Local storage file, relative to the config directory
    pub local_storage_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_endpoint_url: String::from(DEFAULT_SESSION_ENDPOINT_URL),
            local_storage_file: String::from(DEFAULT_LOCAL_STORAGE_FILENAME),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_http_url(&self.session_endpoint_url) {
            return Err(ConfigError::client(format!(
                "client.session_endpoint_url must start with http:// or https://, got '{}'",
                self.session_endpoint_url
            )));
        }

        let path = std::path::Path::new(&self.local_storage_file);
        if self.local_storage_file.is_empty()
            || path.is_absolute()
            || self.local_storage_file.contains("..")
        {
            return Err(ConfigError::client(
                "client.local_storage_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
