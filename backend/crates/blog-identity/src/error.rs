use blog_auth::AuthError;
use blog_core::CoreError;
use blog_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures surfaced at the identity flow boundary
#[derive(Error, Debug)]
pub enum IdentityError {
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

    #[error("Persistence error: {source} {location}")]
    Persistence {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Session endpoint error: {message} {location}")]
    SessionEndpoint {
        message: String,
        location: ErrorLocation,
    },

    #[error("Local storage error: {message} {location}")]
    LocalStorage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn session_endpoint<S: Into<String>>(message: S) -> Self {
        Self::SessionEndpoint {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn local_storage<S: Into<String>>(message: S) -> Self {
        Self::LocalStorage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing to the person at the keyboard
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredentials { code, .. } => match code.as_str() {
                "INVALID_PASSWORD" => "Incorrect password.",
                "EMAIL_NOT_FOUND" => "No account exists for this email.",
                _ => "Invalid email or password.",
            },
            Self::Provider { code, .. } if code == "USER_DISABLED" => {
                "This account has been disabled."
            }
            Self::Provider { .. } => "Sign-in failed. Please try again.",
            Self::Persistence { .. } => "Something went wrong. Please try again later.",
            Self::SessionEndpoint { .. } => "Could not reach the session service.",
            Self::LocalStorage { .. } => "Something went wrong. Please try again later.",
            Self::Validation { .. } => "Please check the highlighted fields and try again.",
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            AuthError::InvalidCredentials { code, .. } => Self::InvalidCredentials { code, location },
            other => Self::Provider {
                code: other.error_code().to_string(),
                message: other.to_string(),
                location,
            },
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Persistence {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for IdentityError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
        }
    }
}

impl From<reqwest::Error> for IdentityError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::session_endpoint(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
