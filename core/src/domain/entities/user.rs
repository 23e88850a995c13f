//! User entity representing a registered account.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity
///
/// The password hash and reset-token fields never leave the server;
/// clients receive the [`UserProfile`] projection instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique username
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Opaque bcrypt hash of the password
    pub password_hash: String,

    /// Optional avatar image reference
    pub avatar: Option<String>,

    /// Outstanding password-reset token, if any
    pub reset_token: Option<String>,

    /// Expiry of the outstanding reset token
    pub reset_token_expires: Option<DateTime<Utc>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a freshly hashed password
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            avatar: None,
            reset_token: None,
            reset_token_expires: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the password hash
    pub fn set_password_hash(&mut self, hash: String) {
        self.password_hash = hash;
        self.updated_at = Utc::now();
    }

    /// Store a password-reset token valid for the given duration
    pub fn set_reset_token(&mut self, token: String, valid_for: Duration) {
        self.reset_token = Some(token);
        self.reset_token_expires = Some(Utc::now() + valid_for);
        self.updated_at = Utc::now();
    }

    /// Clear any outstanding reset token
    pub fn clear_reset_token(&mut self) {
        self.reset_token = None;
        self.reset_token_expires = None;
        self.updated_at = Utc::now();
    }

    /// Whether the stored reset token is still usable
    pub fn reset_token_valid(&self) -> bool {
        match (&self.reset_token, self.reset_token_expires) {
            (Some(_), Some(expires)) => expires > Utc::now(),
            _ => false,
        }
    }

    /// Remove the avatar reference
    pub fn remove_avatar(&mut self) {
        self.avatar = None;
        self.updated_at = Utc::now();
    }

    /// Secret-free projection sent to clients
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
            created_at: self.created_at,
        }
    }
}

/// Client-facing projection of a user, without credentials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(
            "john_doe".to_string(),
            "john@example.com".to_string(),
            "$2b$12$hash".to_string(),
        )
    }

    #[test]
    fn test_new_user() {
        let u = user();
        assert_eq!(u.username, "john_doe");
        assert!(u.avatar.is_none());
        assert!(u.reset_token.is_none());
        assert!(!u.reset_token_valid());
    }

    #[test]
    fn test_reset_token_lifecycle() {
        let mut u = user();
        u.set_reset_token("abcd".to_string(), Duration::hours(1));
        assert!(u.reset_token_valid());

        u.clear_reset_token();
        assert!(!u.reset_token_valid());
        assert!(u.reset_token.is_none());
    }

    #[test]
    fn test_expired_reset_token_is_invalid() {
        let mut u = user();
        u.set_reset_token("abcd".to_string(), Duration::hours(-1));
        assert!(!u.reset_token_valid());
    }

    #[test]
    fn test_profile_has_no_secrets() {
        let mut u = user();
        u.set_reset_token("abcd".to_string(), Duration::hours(1));
        let json = serde_json::to_value(u.profile()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert!(json.get("resetToken").is_none());
        assert_eq!(json["username"], "john_doe");
        assert!(json["createdAt"].is_string());
    }
}
