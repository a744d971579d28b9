//! User aggregate and account status state machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entities::meta::EntityMeta;
use crate::domain::events::UserEvent;
use crate::domain::value_objects::{Email, Password, Username};
use crate::errors::{DomainResult, ValidationError};

/// Account status with an explicit transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Registered but not yet activated
    Pending,
    /// Active account
    Active,
    /// Deactivated account
    Inactive,
}

impl UserStatus {
    /// Checks whether a transition to `target` is legal
    ///
    /// Same-state transitions are always allowed. Once an account leaves
    /// `Pending` it can never return to it.
    pub fn can_transition_to(self, target: UserStatus) -> bool {
        use UserStatus::*;

        if self == target {
            return true;
        }
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Inactive) | (Active, Inactive) | (Inactive, Active)
        )
    }

    /// Returns `target` if the transition is legal
    pub fn transition_to(self, target: UserStatus) -> Result<UserStatus, ValidationError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(ValidationError::IllegalStatusTransition {
                from: self.as_str().to_string(),
                to: target.as_str().to_string(),
            })
        }
    }

    /// Canonical storage representation
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Pending => "pending",
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(UserStatus::Pending),
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(ValidationError::InvalidValue {
                field: "status".to_string(),
                violations: vec![format!("unknown status '{}'", other)],
            }),
        }
    }
}

/// User aggregate root
///
/// State changes only through the lifecycle methods below, which keep
/// the status machine legal, stamp `updated_at` and buffer domain events
/// until the orchestrating service drains them with [`User::take_events`].
#[derive(Debug, Clone)]
pub struct User {
    meta: EntityMeta,
    username: Username,
    email: Email,
    password: Password,
    status: UserStatus,
    events: Vec<UserEvent>,
}

impl User {
    /// Registers a new user account
    ///
    /// Inputs are converted to value objects, each of which validates
    /// itself. The account starts as `Pending` and a registration event
    /// is buffered. Uniqueness of username and email is the calling
    /// workflow's concern.
    pub fn register(username: &str, email: &str, password: &str) -> DomainResult<User> {
        let username = Username::new(username)?;
        let email = Email::new(email)?;
        let password = Password::new(password)?;
        let meta = EntityMeta::new();

        let event = UserEvent::registered(meta.id, username.as_str(), email.as_str());

        Ok(Self {
            meta,
            username,
            email,
            password,
            status: UserStatus::Pending,
            events: vec![event],
        })
    }

    /// Rebuilds a user from stored state
    ///
    /// Stored username and email pass back through their value objects,
    /// so a corrupted row fails loudly. No event is emitted; status and
    /// timestamps are taken verbatim.
    pub fn reconstitute(
        id: Uuid,
        username: &str,
        email: &str,
        password_hash: &str,
        status: UserStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<User> {
        Ok(Self {
            meta: EntityMeta::reconstitute(id, created_at, updated_at),
            username: Username::new(username)?,
            email: Email::new(email)?,
            password: Password::from_hash(password_hash),
            status,
            events: Vec::new(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.meta.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.meta.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.meta.updated_at
    }

    /// Stored password hash, for persistence adapters
    pub fn password_hash(&self) -> &str {
        self.password.hash()
    }

    /// Activates the account
    ///
    /// No-op when already active.
    pub fn activate(&mut self) -> DomainResult<()> {
        if self.status == UserStatus::Active {
            return Ok(());
        }

        self.status = self.status.transition_to(UserStatus::Active)?;
        self.meta.touch();
        self.events
            .push(UserEvent::activated(self.meta.id, self.username.as_str()));
        Ok(())
    }

    /// Deactivates the account
    ///
    /// No-op when already inactive.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        if self.status == UserStatus::Inactive {
            return Ok(());
        }

        self.status = self.status.transition_to(UserStatus::Inactive)?;
        self.meta.touch();
        self.events
            .push(UserEvent::deactivated(self.meta.id, self.username.as_str()));
        Ok(())
    }

    /// Replaces the password after verifying the current one
    ///
    /// The new password re-runs the strength rules. Reusing the current
    /// password is allowed.
    pub fn change_password(&mut self, current: &str, new: &str) -> DomainResult<()> {
        if !self.password.matches(current) {
            return Err(ValidationError::IncorrectPassword.into());
        }

        self.password = Password::new(new)?;
        self.meta.touch();
        self.events.push(UserEvent::password_changed(
            self.meta.id,
            self.username.as_str(),
        ));
        Ok(())
    }

    /// Replaces the email address
    ///
    /// Emits no domain event, unlike the other mutators.
    pub fn update_email(&mut self, new_email: &str) -> DomainResult<()> {
        self.email = Email::new(new_email)?;
        self.meta.touch();
        Ok(())
    }

    /// Verifies a plaintext candidate against the stored password
    pub fn check_password(&self, plaintext: &str) -> bool {
        self.password.matches(plaintext)
    }

    /// Read-only view of the events buffered since the last drain
    pub fn pending_events(&self) -> &[UserEvent] {
        &self.events
    }

    /// Drains the event buffer, leaving it empty
    ///
    /// Called by the orchestrating service after a successful save; the
    /// aggregate never clears the buffer on its own.
    pub fn take_events(&mut self) -> Vec<UserEvent> {
        std::mem::take(&mut self.events)
    }
}
