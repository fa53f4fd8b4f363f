//! Client-side identity flow: login, logout, rehydration and profile edits.

pub mod client_state_store;
pub mod error;
pub mod identity_flow;
pub mod identity_synchronizer;
pub mod local_storage;
pub mod profile_editor;
pub mod session_endpoint;
pub mod session_projector;

pub use client_state_store::{ClientStateStore, InMemoryClientState};
pub use error::{IdentityError, Result};
pub use identity_flow::{IdentityFlow, LoginOutcome, LogoutReport};
pub use identity_synchronizer::IdentitySynchronizer;
pub use local_storage::{FileLocalStorage, LocalStorage, MemoryLocalStorage, UID_KEY};
pub use profile_editor::ProfileEditor;
pub use session_endpoint::{SessionClient, SessionEndpoint};
pub use session_projector::{ProjectionReport, SessionProjector};

#[cfg(test)]
mod tests;
