pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::profile_patch::ProfilePatch;
pub use models::role::Role;
pub use models::user_identity::{MAX_UID_LENGTH, USERS_COLLECTION, UserIdentity, validate_uid};

#[cfg(test)]
mod tests;
