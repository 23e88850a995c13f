//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// `username` and `email` are unique; `create` and `update` surface
/// duplicates as `DomainError::Conflict`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user holding the given password-reset token
    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, DomainError>;

    /// Replace an existing user
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Delete a user
    ///
    /// # Returns
    /// * `Ok(true)` - User was deleted
    /// * `Ok(false)` - User not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
