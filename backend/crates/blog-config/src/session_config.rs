use crate::{ConfigError, ConfigErrorResult, MIN_SESSION_SECRET_LENGTH};

use serde::Deserialize;

#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Key material for the encrypted session cookie. When unset the server
    /// generates a random key, so sessions do not survive a restart.
    pub secret: Option<String>,
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref secret) = self.secret
            && secret.len() < MIN_SESSION_SECRET_LENGTH
        {
            return Err(ConfigError::session(format!(
                "session.secret must be at least {} characters, got {}",
                MIN_SESSION_SECRET_LENGTH,
                secret.len()
            )));
        }

        Ok(())
    }
}

// Never print the secret
impl std::fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
