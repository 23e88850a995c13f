//! Main authentication service implementation
//!
//! Password hashing (bcrypt) and token signing (HS256 JWT) are standard
//! collaborators; this service only orchestrates them around the user
//! repository.

use std::sync::Arc;

use chrono::Duration;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use estate_shared::utils::validation::validators;

use crate::domain::entities::user::{User, UserProfile};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::email::{EmailMessage, EmailService};

use super::config::AuthServiceConfig;
use super::token::AccessTokenIssuer;

/// Minimum accepted password length
const MIN_PASSWORD_LEN: usize = 6;

/// Length of the generated password for OAuth-created accounts
const GENERATED_PASSWORD_LEN: usize = 16;

/// A signed-in user: the profile plus a fresh access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: UserProfile,
    pub token: String,
}

/// Authentication service
pub struct AuthService<U, M>
where
    U: UserRepository,
    M: EmailService,
{
    /// User repository for account persistence
    users: Arc<U>,
    /// Outbound mail relay for reset links
    mailer: Arc<M>,
    /// Access token issuer
    tokens: AccessTokenIssuer,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, M> AuthService<U, M>
where
    U: UserRepository,
    M: EmailService,
{
    /// Create a new authentication service
    pub fn new(
        users: Arc<U>,
        mailer: Arc<M>,
        tokens: AccessTokenIssuer,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            users,
            mailer,
            tokens,
            config,
        }
    }

    /// Register a new account
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<UserProfile> {
        if !validators::is_valid_username(username) {
            return Err(DomainError::validation("Invalid username."));
        }
        if !validators::is_valid_email(email) {
            return Err(DomainError::validation("Invalid email address."));
        }
        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "Password must be at least 6 characters.",
            ));
        }

        let hash = hash_password(password)?;
        let user = self
            .users
            .create(User::new(username.to_string(), email.to_string(), hash))
            .await?;

        info!(user_id = %user.id, "user signed up");
        Ok(user.profile())
    }

    /// Authenticate with email and password
    pub async fn signin(&self, email: &str, password: &str) -> DomainResult<AuthenticatedUser> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let valid = bcrypt::verify(password, &user.password_hash)
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))?;
        if !valid {
            return Err(DomainError::forbidden("Wrong credentials!"));
        }

        let token = self.tokens.issue(user.id)?;
        Ok(AuthenticatedUser {
            user: user.profile(),
            token,
        })
    }

    /// Sign in via an external identity provider, creating the account on
    /// first contact
    ///
    /// The provider already verified the email; a random password keeps the
    /// account usable through the normal reset flow.
    pub async fn oauth(
        &self,
        email: &str,
        name: &str,
        photo: Option<String>,
    ) -> DomainResult<AuthenticatedUser> {
        if let Some(user) = self.users.find_by_email(email).await? {
            let token = self.tokens.issue(user.id)?;
            return Ok(AuthenticatedUser {
                user: user.profile(),
                token,
            });
        }

        let username = self.unique_username(name).await?;
        let password: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_PASSWORD_LEN)
            .map(char::from)
            .collect();
        let hash = hash_password(&password)?;

        let mut user = User::new(username, email.to_string(), hash);
        user.avatar = photo;
        let user = self.users.create(user).await?;

        info!(user_id = %user.id, "user created via oauth");
        let token = self.tokens.issue(user.id)?;
        Ok(AuthenticatedUser {
            user: user.profile(),
            token,
        })
    }

    /// Start a password reset: store a token and mail the link
    pub async fn forgot_password(&self, email: &str) -> DomainResult<()> {
        let mut user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        let token = generate_reset_token();
        user.set_reset_token(
            token.clone(),
            Duration::seconds(self.config.reset_token_ttl_secs),
        );
        self.users.update(user.clone()).await?;

        let link = self.config.reset_link(&token);
        let message = EmailMessage::new(
            user.email.clone(),
            "Password Reset Request",
            format!(
                "Click the following link to reset your password:\n\n{}",
                link
            ),
        );
        self.mailer.send(message).await?;

        info!(user_id = %user.id, "password reset link sent");
        Ok(())
    }

    /// Complete a password reset with a token from the mailed link
    pub async fn reset_password(&self, token: &str, password: &str) -> DomainResult<()> {
        if password.len() < MIN_PASSWORD_LEN {
            return Err(DomainError::validation(
                "Password must be at least 6 characters.",
            ));
        }

        let mut user = self
            .users
            .find_by_reset_token(token)
            .await?
            .filter(User::reset_token_valid)
            .ok_or_else(|| {
                warn!("password reset attempted with invalid token");
                DomainError::validation("Token is invalid or expired.")
            })?;

        user.set_password_hash(hash_password(password)?);
        user.clear_reset_token();
        self.users.update(user).await?;
        Ok(())
    }

    /// Derive a username from a display name, suffixing a counter until free
    async fn unique_username(&self, name: &str) -> DomainResult<String> {
        let base: String = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        let base = if base.len() >= 3 {
            base
        } else {
            format!("user{}", &Uuid::new_v4().simple().to_string()[..6])
        };

        if self.users.find_by_username(&base).await?.is_none() {
            return Ok(base);
        }

        let mut count = 1;
        loop {
            let candidate = format!("{}{}", base, count);
            if self.users.find_by_username(&candidate).await?.is_none() {
                return Ok(candidate);
            }
            count += 1;
        }
    }
}

/// Hash a password with bcrypt at the default cost
fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
}

/// 32 random bytes, hex encoded
fn generate_reset_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}
