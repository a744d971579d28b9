//! Mock implementations for testing the authentication service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::events::{EventDispatcher, UserEvent};
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::auth::CredentialVerifier;

/// Event dispatcher recording every delivered event
pub struct RecordingEventDispatcher {
    events: Arc<Mutex<Vec<UserEvent>>>,
}

impl RecordingEventDispatcher {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn recorded(&self) -> Vec<UserEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventDispatcher for RecordingEventDispatcher {
    async fn dispatch(&self, event: &UserEvent) -> DomainResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Event dispatcher failing on every delivery
pub struct FailingEventDispatcher;

#[async_trait]
impl EventDispatcher for FailingEventDispatcher {
    async fn dispatch(&self, _event: &UserEvent) -> DomainResult<()> {
        Err(DomainError::Internal {
            message: "listener unavailable".to_string(),
        })
    }
}

/// Credential verifier with a fixed outcome
pub struct StaticCredentialVerifier {
    pub succeed: bool,
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, _username_or_email: &str, _password: &str) -> DomainResult<()> {
        if self.succeed {
            Ok(())
        } else {
            Err(DomainError::Auth(AuthError::AuthenticationFailed))
        }
    }
}
