use serde::{Deserialize, Serialize};

/// Identity confirmed by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedCredential {
    pub uid: String,
    pub email: Option<String>,
}
