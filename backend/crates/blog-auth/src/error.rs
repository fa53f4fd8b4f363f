use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Password sign-in rejected. `code` keeps the provider's reason
    /// (`EMAIL_NOT_FOUND`, `INVALID_PASSWORD`, ...).
    #[error("Invalid credentials ({code}) {location}")]
    InvalidCredentials {
        code: String,
        location: ErrorLocation,
    },

    #[error("Provider error ({code}): {message} {location}")]
    Provider {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request to identity provider failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Unexpected identity provider response: {message} {location}")]
    InvalidResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &str {
        match self {
            Self::InvalidCredentials { code, .. } => code,
            Self::Provider { code, .. } => code,
            Self::Http { .. } => "NETWORK_REQUEST_FAILED",
            Self::InvalidResponse { .. } => "INVALID_RESPONSE",
        }
    }

    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials { .. })
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(std::panic::Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
