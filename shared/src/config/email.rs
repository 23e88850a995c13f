//! SMTP relay configuration

use serde::{Deserialize, Serialize};

/// Configuration for the outbound SMTP relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP username
    pub smtp_user: String,

    /// SMTP password (app password, never the account password)
    pub smtp_password: String,

    /// From address used for outbound mail
    pub from_address: String,

    /// Inbox that receives contact-form messages
    pub contact_inbox: String,

    /// Base URL of the web client, used to build password-reset links
    pub client_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("smtp.gmail.com"),
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_address: String::from("AM Estate <noreply@amestate.example>"),
            contact_inbox: String::new(),
            client_base_url: String::from("http://localhost:5173"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_user: std::env::var("EMAIL_USER").unwrap_or(defaults.smtp_user),
            smtp_password: std::env::var("EMAIL_PASS").unwrap_or(defaults.smtp_password),
            from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            contact_inbox: std::env::var("CONTACT_INBOX")
                .or_else(|_| std::env::var("EMAIL_USER"))
                .unwrap_or(defaults.contact_inbox),
            client_base_url: std::env::var("CLIENT_BASE_URL").unwrap_or(defaults.client_base_url),
        }
    }

    /// Build the password-reset link for a token
    pub fn reset_link(&self, token: &str) -> String {
        format!(
            "{}/reset-password/{}",
            self.client_base_url.trim_end_matches('/'),
            token
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_link_trims_trailing_slash() {
        let config = EmailConfig {
            client_base_url: "https://amestate.example/".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.reset_link("abc123"),
            "https://amestate.example/reset-password/abc123"
        );
    }
}
