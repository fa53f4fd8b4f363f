use blog_core::UserIdentity;

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub user: UserIdentity,
}
