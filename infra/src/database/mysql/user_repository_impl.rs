//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use estate_core::domain::entities::user::User;
use estate_core::errors::DomainError;
use estate_core::repositories::UserRepository;

const SELECT_COLUMNS: &str = "id, username, email, password_hash, avatar, reset_token, \
     reset_token_expires, created_at, updated_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::internal(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            password_hash: row.try_get("password_hash").map_err(|e| {
                DomainError::internal(format!("Failed to get password_hash: {}", e))
            })?,
            avatar: row
                .try_get("avatar")
                .map_err(|e| DomainError::internal(format!("Failed to get avatar: {}", e)))?,
            reset_token: row
                .try_get("reset_token")
                .map_err(|e| DomainError::internal(format!("Failed to get reset_token: {}", e)))?,
            reset_token_expires: row
                .try_get::<Option<DateTime<Utc>>, _>("reset_token_expires")
                .map_err(|e| {
                    DomainError::internal(format!("Failed to get reset_token_expires: {}", e))
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    async fn find_one(&self, column: &str, value: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? LIMIT 1",
            SELECT_COLUMNS, column
        );

        let result = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

/// Map a write failure, turning duplicate-key violations into Conflict
fn map_write_error(e: sqlx::Error, action: &str) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::conflict("User already exists with this email or username.");
        }
    }
    DomainError::internal(format!("Failed to {} user: {}", action, e))
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, avatar,
                reset_token, reset_token_expires, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.avatar)
            .bind(&user.reset_token)
            .bind(user.reset_token_expires)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "create"))?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.find_one("username", username).await
    }

    async fn find_by_reset_token(&self, token: &str) -> Result<Option<User>, DomainError> {
        self.find_one("reset_token", token).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                username = ?, email = ?, password_hash = ?, avatar = ?,
                reset_token = ?, reset_token_expires = ?, updated_at = ?
            WHERE id = ?
        "#;

        sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.avatar)
            .bind(&user.reset_token)
            .bind(user.reset_token_expires)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "update"))?;

        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
