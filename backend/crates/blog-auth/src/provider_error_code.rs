use crate::AuthError;

use std::panic::Location;

use error_location::ErrorLocation;

/// Codes that mean "these credentials do not sign anyone in"
const INVALID_CREDENTIAL_CODES: &[&str] = &[
    "EMAIL_NOT_FOUND",
    "INVALID_PASSWORD",
    "INVALID_LOGIN_CREDENTIALS",
];

/// Turn a provider error message (`"CODE"` or `"CODE : detail"`) into an
/// `AuthError`.
#[track_caller]
pub fn classify_provider_error(raw_message: &str) -> AuthError {
    let location = ErrorLocation::from(Location::caller());
    let (code, detail) = match raw_message.split_once(':') {
        Some((code, detail)) => (code.trim(), detail.trim()),
        None => (raw_message.trim(), ""),
    };

    if INVALID_CREDENTIAL_CODES.contains(&code) {
        return AuthError::InvalidCredentials {
            code: code.to_string(),
            location,
        };
    }

    AuthError::Provider {
        code: if code.is_empty() {
            "UNKNOWN".to_string()
        } else {
            code.to_string()
        },
        message: if detail.is_empty() {
            raw_message.trim().to_string()
        } else {
            detail.to_string()
        },
        location,
    }
}
