pub mod error;
pub mod extractors;
pub mod me;
pub mod session;
