use crate::{IdentityError, Result as IdentityErrorResult};

use blog_auth::VerifiedCredential;
use blog_core::{USERS_COLLECTION, UserIdentity, validate_uid};
use blog_db::{DbError, UserRepository};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info};

/// Lookup-or-create of the identity document for a verified uid
#[derive(Clone)]
pub struct IdentitySynchronizer {
    users: UserRepository,
}

impl IdentitySynchronizer {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Return the stored identity for `credential.uid`, creating the default
    /// Viewer record on first sight. An existing record is returned verbatim.
    pub async fn synchronize(
        &self,
        credential: &VerifiedCredential,
    ) -> IdentityErrorResult<UserIdentity> {
        validate_uid(&credential.uid)?;

        if let Some(existing) = self.users.find(&credential.uid).await? {
            debug!("Identity document found for {}", credential.uid);
            return Ok(existing);
        }

        let identity = UserIdentity::new_default(&credential.uid, credential.email.clone());
        if self.users.create_if_absent(&identity).await? {
            info!("Created identity document for {} as {}", identity.uid, identity.role);
            return Ok(identity);
        }

        // Another writer created it between our read and write
        debug!("Identity document for {} created concurrently, re-reading", identity.uid);
        self.users.find(&identity.uid).await?.ok_or_else(|| {
            IdentityError::from(DbError::NotFound {
                collection: USERS_COLLECTION.to_string(),
                id: identity.uid.clone(),
                location: ErrorLocation::from(Location::caller()),
            })
        })
    }
}
