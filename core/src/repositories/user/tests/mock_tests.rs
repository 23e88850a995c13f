//! Tests for the mock user repository

use chrono::Duration;

use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::user::mock::MockUserRepository;
use crate::repositories::user::UserRepository;

fn user(username: &str, email: &str) -> User {
    User::new(
        username.to_string(),
        email.to_string(),
        "$2b$12$hash".to_string(),
    )
}

#[tokio::test]
async fn test_create_and_lookup() {
    let repo = MockUserRepository::new();
    let created = repo.create(user("john", "john@example.com")).await.unwrap();

    assert!(repo.find_by_id(created.id).await.unwrap().is_some());
    assert!(repo
        .find_by_email("john@example.com")
        .await
        .unwrap()
        .is_some());
    assert!(repo.find_by_username("john").await.unwrap().is_some());
    assert!(repo.find_by_username("jane").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_conflicts() {
    let repo = MockUserRepository::new();
    repo.create(user("john", "john@example.com")).await.unwrap();

    let result = repo.create(user("johnny", "john@example.com")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_find_by_reset_token() {
    let repo = MockUserRepository::new();
    let mut u = user("john", "john@example.com");
    u.set_reset_token("deadbeef".to_string(), Duration::hours(1));
    repo.create(u).await.unwrap();

    let found = repo.find_by_reset_token("deadbeef").await.unwrap();
    assert!(found.is_some());
    assert!(repo.find_by_reset_token("cafebabe").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete() {
    let repo = MockUserRepository::new();
    let created = repo.create(user("john", "john@example.com")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
}
