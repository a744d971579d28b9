//! In-memory implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{Email, Username};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository backed by a map
///
/// Enforces the same username/email uniqueness a storage-level unique
/// index would, including on racy saves.
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
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username() == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.username() == username))
    }

    async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email() == email))
    }

    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.id() != user.id() && u.username() == user.username())
        {
            return Err(DomainError::Duplicate {
                field: "username".to_string(),
                value: user.username().to_string(),
            });
        }
        if users
            .values()
            .any(|u| u.id() != user.id() && u.email() == user.email())
        {
            return Err(DomainError::Duplicate {
                field: "email".to_string(),
                value: user.email().to_string(),
            });
        }

        // Stored rows hold column state only; pending event buffers do
        // not round-trip through persistence.
        let mut stored = user;
        stored.take_events();
        users.insert(stored.id(), stored.clone());
        Ok(stored)
    }
}
