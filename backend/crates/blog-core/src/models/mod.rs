pub mod profile_patch;
pub mod role;
pub mod user_identity;
