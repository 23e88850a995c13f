//! User service implementation
//!
//! All mutations are self-only: the authenticated caller may touch nothing
//! but their own account.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use estate_shared::utils::validation::validators;

use crate::domain::entities::user::UserProfile;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Optional account changes; only the provided fields are applied
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<String>,
}

/// Service for user profile operations
pub struct UserService<U>
where
    U: UserRepository,
{
    users: Arc<U>,
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    /// Create a new user service
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Fetch a user's public profile
    pub async fn get(&self, id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        Ok(user.profile())
    }

    /// Apply account changes; callers may only update themselves
    pub async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        changes: UserChanges,
    ) -> DomainResult<UserProfile> {
        if id != requester_id {
            return Err(DomainError::forbidden(
                "You can only update your own account!",
            ));
        }

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        if let Some(username) = changes.username {
            if !validators::is_valid_username(&username) {
                return Err(DomainError::validation("Invalid username."));
            }
            user.username = username;
        }
        if let Some(email) = changes.email {
            if !validators::is_valid_email(&email) {
                return Err(DomainError::validation("Invalid email address."));
            }
            user.email = email;
        }
        if let Some(password) = changes.password {
            if password.len() < 6 {
                return Err(DomainError::validation(
                    "Password must be at least 6 characters.",
                ));
            }
            let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)
                .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))?;
            user.set_password_hash(hash);
        }
        if let Some(avatar) = changes.avatar {
            user.avatar = Some(avatar);
        }

        let updated = self.users.update(user).await?;
        Ok(updated.profile())
    }

    /// Delete an account; callers may only delete themselves
    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> DomainResult<()> {
        if id != requester_id {
            return Err(DomainError::forbidden(
                "You can only delete your own account!",
            ));
        }

        if !self.users.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }

        info!(user_id = %id, "user deleted");
        Ok(())
    }

    /// Clear the avatar reference; callers may only touch their own
    pub async fn remove_avatar(&self, id: Uuid, requester_id: Uuid) -> DomainResult<UserProfile> {
        if id != requester_id {
            return Err(DomainError::forbidden(
                "You can only update your own account!",
            ));
        }

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        user.remove_avatar();
        let updated = self.users.update(user).await?;
        Ok(updated.profile())
    }
}
