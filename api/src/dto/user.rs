//! User profile request payloads

use serde::{Deserialize, Serialize};

/// Partial account update; only provided fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}
