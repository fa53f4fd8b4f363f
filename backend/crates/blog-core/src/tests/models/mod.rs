mod profile_patch;
mod role;
mod user_identity;
