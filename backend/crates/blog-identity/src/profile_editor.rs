use crate::{ClientStateStore, IdentityError, Result as IdentityErrorResult};

use blog_core::{ProfilePatch, validate_uid};
use blog_db::UserRepository;

use std::sync::Arc;

use log::info;

/// Writes profile edits to the identity document and mirrors them locally
#[derive(Clone)]
pub struct ProfileEditor {
    users: UserRepository,
    state: Arc<dyn ClientStateStore>,
}

impl ProfileEditor {
    pub fn new(users: UserRepository, state: Arc<dyn ClientStateStore>) -> Self {
        Self { users, state }
    }

    pub async fn update_profile(&self, uid: &str, patch: &ProfilePatch) -> IdentityErrorResult<()> {
        validate_uid(uid)?;
        if patch.is_empty() {
            return Err(IdentityError::validation("profile patch has no fields", None));
        }

        self.users.update_profile(uid, patch).await?;

        // Only mirror the edit if the signed-in user is the one edited
        let mirrored = self.state.patch_for(uid, patch);

        info!("Updated profile for {uid} (client state mirrored: {mirrored})");
        Ok(())
    }
}
