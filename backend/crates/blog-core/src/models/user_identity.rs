use crate::{CoreError, ProfilePatch, Result as CoreErrorResult, Role};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Document collection holding one `UserIdentity` per uid
pub const USERS_COLLECTION: &str = "users";

pub const MAX_UID_LENGTH: usize = 128;

/// Profile record for an authenticated principal.
///
/// The document id in the `users` collection is always `uid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Role,

    // Profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    // Audit
    pub created_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Default record written on first login. A missing email is stored as "".
    pub fn new_default(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email: Some(email.unwrap_or_default()),
            role: Role::Viewer,
            username: None,
            full_name: None,
            img: None,
            profile: None,
            bio: None,
            company: None,
            education: None,
            job_description: None,
            skills: None,
            linked_in: None,
            subscribed: None,
            created_at: Utc::now(),
        }
    }

    /// Merge the fields present in `patch`, leaving everything else untouched
    pub fn apply(&mut self, patch: &ProfilePatch) {
        patch.apply_to(self);
    }
}

/// Check that a uid can be used as a document id and cookie value
#[track_caller]
pub fn validate_uid(uid: &str) -> CoreErrorResult<()> {
    if uid.trim().is_empty() {
        return Err(CoreError::Validation {
            message: "uid cannot be empty".to_string(),
            field: Some("uid".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    if uid.len() > MAX_UID_LENGTH {
        return Err(CoreError::Validation {
            message: format!("uid exceeds maximum length of {MAX_UID_LENGTH}"),
            field: Some("uid".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
