//! User repository trait defining the interface for user data persistence.
//!
//! This module defines the repository pattern interface for the User
//! aggregate. The trait is async-first and uses Result types for proper
//! error handling; implementations live in the infrastructure layer.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::{Email, Username};
use crate::errors::DomainError;

/// Repository trait for User aggregate persistence
///
/// Username and email are unique across accounts. The workflow's
/// existence pre-checks are inherently racy, so `save` must surface a
/// storage-level unique-index violation as `DomainError::Duplicate`
/// rather than assuming the pre-check caught it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given id
    /// * `Err(DomainError)` - Storage error
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;

    /// Check whether a username is already taken
    async fn exists_by_username(&self, username: &Username) -> Result<bool, DomainError>;

    /// Check whether an email address is already taken
    async fn exists_by_email(&self, email: &Email) -> Result<bool, DomainError>;

    /// Insert or update a user
    ///
    /// # Returns
    /// * `Ok(User)` - The persisted state, including storage-assigned fields
    /// * `Err(DomainError::Duplicate)` - Unique-index violation on username or email
    /// * `Err(DomainError)` - Other storage error
    async fn save(&self, user: User) -> Result<User, DomainError>;
}
