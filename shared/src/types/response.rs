//! API error response structure
//!
//! Success responses return the resource(s) directly as JSON; only failures
//! share a common envelope.

use serde::{Deserialize, Serialize};

/// Error body shared by every API endpoint
///
/// Shape: `{ "success": false, "statusCode": 404, "message": "..." }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Always false; present so clients can branch without inspecting status
    pub success: bool,

    /// HTTP status code mirrored into the body
    pub status_code: u16,

    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    /// Create a new error body
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_serializes_camel_case() {
        let body = ErrorBody::new(404, "Listing not found!");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["message"], "Listing not found!");
    }
}
