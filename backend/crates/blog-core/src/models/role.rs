use serde::{Deserialize, Serialize};

/// Authorization role stored on a user document
///
/// New users always start as `Viewer`. Elevation to `Admin` happens only by
/// editing the document directly in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    #[default]
    Viewer,
    Admin,
}

impl Role {
    /// Convert to stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "Viewer",
            Self::Admin => "Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
