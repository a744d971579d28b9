//! Unit tests for the mock user repository

use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{Email, Username};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

fn user(name: &str, email: &str) -> User {
    User::register(name, email, "Password1!").unwrap()
}

#[tokio::test]
async fn test_save_and_find() {
    let repo = MockUserRepository::new();
    let saved = repo.save(user("dave", "dave@example.com")).await.unwrap();

    let by_id = repo.find_by_id(saved.id()).await.unwrap().unwrap();
    assert_eq!(by_id.id(), saved.id());

    let username = Username::new("dave").unwrap();
    let by_username = repo.find_by_username(&username).await.unwrap().unwrap();
    assert_eq!(by_username.id(), saved.id());

    let email = Email::new("dave@example.com").unwrap();
    assert!(repo.exists_by_email(&email).await.unwrap());
    assert!(repo.exists_by_username(&username).await.unwrap());

    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let repo = MockUserRepository::new();
    repo.save(user("dave", "dave@example.com")).await.unwrap();

    let err = repo
        .save(user("dave", "other@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Duplicate { ref field, .. } if field == "username"
    ));
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let repo = MockUserRepository::new();
    repo.save(user("dave", "dave@example.com")).await.unwrap();

    let err = repo
        .save(user("erin", "dave@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Duplicate { ref field, .. } if field == "email"
    ));
}

#[tokio::test]
async fn test_save_updates_existing_user() {
    let repo = MockUserRepository::new();
    let saved = repo.save(user("dave", "dave@example.com")).await.unwrap();

    let mut updated = saved.clone();
    updated.update_email("dave.new@example.com").unwrap();
    repo.save(updated).await.unwrap();

    let reloaded = repo.find_by_id(saved.id()).await.unwrap().unwrap();
    assert_eq!(reloaded.email().as_str(), "dave.new@example.com");
}

#[tokio::test]
async fn test_pending_events_not_persisted() {
    let repo = MockUserRepository::new();
    let fresh = user("dave", "dave@example.com");
    assert_eq!(fresh.pending_events().len(), 1);

    let saved = repo.save(fresh).await.unwrap();
    assert!(saved.pending_events().is_empty());

    let reloaded = repo.find_by_id(saved.id()).await.unwrap().unwrap();
    assert!(reloaded.pending_events().is_empty());
}
