pub mod session_uid;
