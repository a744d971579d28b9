//! Credential verification port used by the authentication workflow.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::value_objects::Username;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;

/// Port for verifying login credentials
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies a credential pair
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Credentials match an account
    /// * `Err(DomainError::Auth(AuthError::AuthenticationFailed))` - Mismatch
    async fn verify(&self, username_or_email: &str, password: &str) -> DomainResult<()>;
}

/// Default verifier backed by the user repository
///
/// Resolves the identifier as a username and checks the candidate
/// against the stored password hash. A missing account and a wrong
/// password are indistinguishable to the caller.
pub struct RepositoryCredentialVerifier<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> RepositoryCredentialVerifier<U> {
    /// Create a new repository-backed verifier
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<U: UserRepository> CredentialVerifier for RepositoryCredentialVerifier<U> {
    async fn verify(&self, username_or_email: &str, password: &str) -> DomainResult<()> {
        let username = Username::new(username_or_email)
            .map_err(|_| DomainError::Auth(AuthError::AuthenticationFailed))?;

        let user = self
            .user_repository
            .find_by_username(&username)
            .await?
            .ok_or(DomainError::Auth(AuthError::AuthenticationFailed))?;

        if user.check_password(password) {
            Ok(())
        } else {
            Err(DomainError::Auth(AuthError::AuthenticationFailed))
        }
    }
}
