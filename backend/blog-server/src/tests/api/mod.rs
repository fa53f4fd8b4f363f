mod error;
mod session_uid;
