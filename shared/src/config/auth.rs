//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing access tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-me-in-production"),
            access_token_expiry: 86400, // 1 day, matching the web client's session length
            issuer: String::from("am-estate"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "change-me-in-production".to_string());
        let access_token_expiry = std::env::var("JWT_EXPIRY_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400);

        Self {
            secret,
            access_token_expiry,
            ..Default::default()
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "change-me-in-production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret_detection() {
        assert!(JwtConfig::default().is_using_default_secret());
        assert!(!JwtConfig::new("s3cret").is_using_default_secret());
    }
}
