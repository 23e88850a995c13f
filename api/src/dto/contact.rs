//! Contact form payload

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    pub subject: Option<String>,

    #[validate(length(min = 1, message = "is required"))]
    pub message: String,
}
