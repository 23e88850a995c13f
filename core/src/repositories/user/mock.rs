//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(DomainError::conflict(
                "User already exists with this email or username.",
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.reset_token.as_deref() == Some(token))
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::not_found("User"));
        }

        if users
            .values()
            .any(|u| u.id != user.id && (u.username == user.username || u.email == user.email))
        {
            return Err(DomainError::conflict(
                "User already exists with this email or username.",
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}
