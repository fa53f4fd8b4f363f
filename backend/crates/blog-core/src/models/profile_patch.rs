use crate::UserIdentity;

use serde::{Deserialize, Serialize};

/// Partial profile update.
///
/// Only present fields are written. `uid`, `role` and `createdAt` are not
/// patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
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
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, identity: &mut UserIdentity) {
        fn merge<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if let Some(v) = value {
                *target = Some(v.clone());
            }
        }

        merge(&mut identity.email, &self.email);
        merge(&mut identity.username, &self.username);
        merge(&mut identity.full_name, &self.full_name);
        merge(&mut identity.img, &self.img);
        merge(&mut identity.profile, &self.profile);
        merge(&mut identity.bio, &self.bio);
        merge(&mut identity.company, &self.company);
        merge(&mut identity.education, &self.education);
        merge(&mut identity.job_description, &self.job_description);
        merge(&mut identity.skills, &self.skills);
        merge(&mut identity.linked_in, &self.linked_in);
        merge(&mut identity.subscribed, &self.subscribed);
    }
}
