//! User lifecycle service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::events::UserEvent;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Service for lifecycle operations on existing accounts
///
/// Each operation loads the aggregate, applies one mutation and saves.
/// The events drained from the aggregate are handed back to the caller;
/// this service does not dispatch them.
pub struct UserService<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    /// Create a new user lifecycle service
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// Activates the account with the given id
    ///
    /// # Returns
    ///
    /// * `Ok((User, events))` - The persisted account and drained events
    /// * `Err(DomainError::NotFound)` - No account with the given id
    pub async fn activate(&self, id: Uuid) -> DomainResult<(User, Vec<UserEvent>)> {
        let mut user = self.load(id).await?;
        user.activate()?;
        self.persist(user).await
    }

    /// Deactivates the account with the given id
    pub async fn deactivate(&self, id: Uuid) -> DomainResult<(User, Vec<UserEvent>)> {
        let mut user = self.load(id).await?;
        user.deactivate()?;
        self.persist(user).await
    }

    /// Replaces the account's email address
    pub async fn update_email(
        &self,
        id: Uuid,
        new_email: &str,
    ) -> DomainResult<(User, Vec<UserEvent>)> {
        let mut user = self.load(id).await?;
        user.update_email(new_email)?;
        self.persist(user).await
    }

    /// Changes the account password after verifying the current one
    pub async fn change_password(
        &self,
        id: Uuid,
        current: &str,
        new: &str,
    ) -> DomainResult<(User, Vec<UserEvent>)> {
        let mut user = self.load(id).await?;
        user.change_password(current, new)?;
        self.persist(user).await
    }

    async fn load(&self, id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("user {}", id),
            })
    }

    async fn persist(&self, mut user: User) -> DomainResult<(User, Vec<UserEvent>)> {
        // Drained before save so events surface only for committed state
        let events = user.take_events();
        let persisted = self.user_repository.save(user).await?;

        tracing::debug!(user_id = %persisted.id(), "user lifecycle change persisted");

        Ok((persisted, events))
    }
}
