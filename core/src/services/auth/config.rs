//! Authentication service configuration

/// Configuration for [`super::AuthService`]
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Base URL of the web client, used to build password-reset links
    pub reset_link_base: String,

    /// How long a password-reset token stays valid, in seconds
    pub reset_token_ttl_secs: i64,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            reset_link_base: String::from("http://localhost:5173"),
            reset_token_ttl_secs: 3600, // 1 hour
        }
    }
}

impl AuthServiceConfig {
    /// Build the password-reset link for a token
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}/reset-password/{}",
            self.reset_link_base.trim_end_matches('/'),
            token
        )
    }
}
