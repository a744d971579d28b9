//! Main authentication workflow implementation

use std::sync::Arc;

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::User;
use crate::domain::events::{EventDispatcher, UserEvent};
use crate::domain::value_objects::{AuthResponse, Email, UserSummary, Username};
use crate::errors::{AuthError, DomainError, DomainResult, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;
use super::credentials::CredentialVerifier;

/// Authentication service orchestrating registration, login and token refresh
pub struct AuthService<U, C, D>
where
    U: UserRepository,
    C: CredentialVerifier,
    D: EventDispatcher,
{
    /// User repository for persistence
    user_repository: Arc<U>,
    /// Collaborator validating login credentials
    credential_verifier: Arc<C>,
    /// Dispatcher delivering domain events after commit
    event_dispatcher: Arc<D>,
    /// Token service for signed session tokens
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, C, D> AuthService<U, C, D>
where
    U: UserRepository,
    C: CredentialVerifier,
    D: EventDispatcher,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        credential_verifier: Arc<C>,
        event_dispatcher: Arc<D>,
        token_service: Arc<TokenService>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            credential_verifier,
            event_dispatcher,
            token_service,
            config,
        }
    }

    /// Registers a new user account
    ///
    /// This method:
    /// 1. Normalizes username and email into value objects (fails before any I/O)
    /// 2. Rejects usernames and emails that are already taken
    /// 3. Builds the pending user aggregate
    /// 4. Persists it; a storage-level uniqueness race surfaces as a duplicate
    /// 5. Issues access and refresh tokens keyed by the persisted username
    /// 6. Dispatches the buffered domain events, post-commit
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Tokens plus a summary of the new account
    /// * `Err(DomainError)` - Validation failure, duplicate, or storage error
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        if !self.config.allow_registration {
            return Err(DomainError::Auth(AuthError::RegistrationDisabled));
        }

        // Step 1: Validate inputs before touching the repository
        let username = Username::new(username)?;
        let email = Email::new(email)?;

        // Step 2: Best-effort existence pre-checks
        if self.user_repository.exists_by_username(&username).await? {
            return Err(DomainError::Duplicate {
                field: "username".to_string(),
                value: username.to_string(),
            });
        }
        if self.user_repository.exists_by_email(&email).await? {
            return Err(DomainError::Duplicate {
                field: "email".to_string(),
                value: email.to_string(),
            });
        }

        // Step 3: Build the aggregate
        let mut user = User::register(username.as_str(), email.as_str(), password)?;

        // Step 4: Persist; the pre-checks are racy, the unique index is not
        let persisted = self.user_repository.save(user.clone()).await?;

        // Step 5: Issue tokens for the persisted username
        let response = self.issue_tokens(&persisted)?;

        // Step 6: Deliver events only after the save succeeded
        self.dispatch_events(user.take_events()).await;

        tracing::info!(
            user_id = %persisted.id(),
            username = %persisted.username(),
            "user registered"
        );

        Ok(response)
    }

    /// Authenticates an existing user
    ///
    /// Credential verification is delegated to the configured
    /// [`CredentialVerifier`]; the account lookup is by username only.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - Fresh tokens plus the account summary
    /// * `Err(DomainError)` - Credential mismatch or missing account
    pub async fn authenticate(
        &self,
        username_or_email: &str,
        password: &str,
    ) -> DomainResult<AuthResponse> {
        // Step 1: Delegate credential verification
        self.credential_verifier
            .verify(username_or_email, password)
            .await?;

        // Step 2: Look up the account, by username only
        let username = Username::new(username_or_email)?;
        let user = self
            .user_repository
            .find_by_username(&username)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        // Step 3: Issue fresh tokens
        let response = self.issue_tokens(&user)?;

        tracing::info!(
            user_id = %user.id(),
            username = %user.username(),
            "user authenticated"
        );

        Ok(response)
    }

    /// Exchanges a valid refresh token for a new access token
    ///
    /// The original refresh token is echoed back unchanged; there is no
    /// rotation.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New access token plus the original refresh token
    /// * `Err(DomainError)` - The refresh token is invalid or expired
    pub async fn refresh_token(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        // Step 1: Extract the subject; the signature is verified here
        let subject = self.token_service.extract_subject(refresh_token)?;

        // Step 2: Gate on full validity (subject match and not expired)
        if !self.token_service.is_valid(refresh_token, &subject) {
            return Err(DomainError::Token(TokenError::InvalidRefreshToken));
        }

        // Step 3: Issue a new access token for the same subject
        let access_token = self.token_service.generate(&subject)?;

        tracing::debug!(subject = %subject, "access token refreshed");

        Ok(TokenPair::new(
            access_token,
            refresh_token.to_string(),
            self.token_service.access_expires_in(),
            self.token_service.refresh_expires_in(),
        ))
    }

    fn issue_tokens(&self, user: &User) -> DomainResult<AuthResponse> {
        let access_token = self.token_service.generate(user.username().as_str())?;
        let refresh_token = self
            .token_service
            .generate_refresh(user.username().as_str())?;

        Ok(AuthResponse::new(
            access_token,
            refresh_token,
            self.token_service.access_expires_in(),
            UserSummary::from(user),
        ))
    }

    async fn dispatch_events(&self, events: Vec<UserEvent>) {
        for event in events {
            // At-least-once, post-commit: a failed listener must not
            // roll back committed state.
            if let Err(e) = self.event_dispatcher.dispatch(&event).await {
                tracing::warn!(
                    event_type = event.event_type(),
                    error = %e,
                    "event dispatch failed"
                );
            }
        }
    }
}
