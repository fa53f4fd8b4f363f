use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity providers offered as popup sign-in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FederatedProvider {
    Google,
    GitHub,
    Yahoo,
}

impl FederatedProvider {
    /// Provider id understood by the identity toolkit
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::Google => "google.com",
            Self::GitHub => "github.com",
            Self::Yahoo => "yahoo.com",
        }
    }
}

impl FromStr for FederatedProvider {
    type Err = AuthError;

    #[track_caller]
    fn from_str(s: &str) -> AuthErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "google" | "google.com" => Ok(Self::Google),
            "github" | "github.com" => Ok(Self::GitHub),
            "yahoo" | "yahoo.com" => Ok(Self::Yahoo),
            _ => Err(AuthError::Provider {
                code: "OPERATION_NOT_ALLOWED".to_string(),
                message: format!("Unsupported identity provider: {s}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FederatedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.provider_id())
    }
}
