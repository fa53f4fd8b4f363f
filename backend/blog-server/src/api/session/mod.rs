pub mod establish_session_request;
pub mod message_response;
#[allow(clippy::module_inception)]
pub mod session;
pub mod session_response;
