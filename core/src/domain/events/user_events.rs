//! User domain events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Payload of a user domain event
///
/// One tagged union instead of a type per event, so dispatchers match
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserEventKind {
    /// A new account was registered
    Registered { username: String, email: String },

    /// The account was activated
    Activated { username: String },

    /// The account was deactivated
    Deactivated { username: String },

    /// The account password was changed
    PasswordChanged { username: String },
}

/// Immutable record of something that happened to a user aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEvent {
    /// Unique identifier of this event
    pub event_id: Uuid,

    /// Identifier of the user the event belongs to
    pub user_id: Uuid,

    /// Timestamp when the event occurred
    pub occurred_at: DateTime<Utc>,

    /// Event payload
    #[serde(flatten)]
    pub kind: UserEventKind,
}

impl UserEvent {
    fn new(user_id: Uuid, kind: UserEventKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            user_id,
            occurred_at: Utc::now(),
            kind,
        }
    }

    /// Creates a registration event
    pub fn registered(user_id: Uuid, username: &str, email: &str) -> Self {
        Self::new(
            user_id,
            UserEventKind::Registered {
                username: username.to_string(),
                email: email.to_string(),
            },
        )
    }

    /// Creates an activation event
    pub fn activated(user_id: Uuid, username: &str) -> Self {
        Self::new(
            user_id,
            UserEventKind::Activated {
                username: username.to_string(),
            },
        )
    }

    /// Creates a deactivation event
    pub fn deactivated(user_id: Uuid, username: &str) -> Self {
        Self::new(
            user_id,
            UserEventKind::Deactivated {
                username: username.to_string(),
            },
        )
    }

    /// Creates a password-change event
    pub fn password_changed(user_id: Uuid, username: &str) -> Self {
        Self::new(
            user_id,
            UserEventKind::PasswordChanged {
                username: username.to_string(),
            },
        )
    }

    /// Stable tag used by downstream consumers
    pub fn event_type(&self) -> &'static str {
        match self.kind {
            UserEventKind::Registered { .. } => "user.registered",
            UserEventKind::Activated { .. } => "user.activated",
            UserEventKind::Deactivated { .. } => "user.deactivated",
            UserEventKind::PasswordChanged { .. } => "user.password_changed",
        }
    }

    /// Primitive key/value view for downstream serialization
    pub fn metadata(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("user_id".to_string(), self.user_id.to_string());

        match &self.kind {
            UserEventKind::Registered { username, email } => {
                map.insert("username".to_string(), username.clone());
                map.insert("email".to_string(), email.clone());
            }
            UserEventKind::Activated { username }
            | UserEventKind::Deactivated { username }
            | UserEventKind::PasswordChanged { username } => {
                map.insert("username".to_string(), username.clone());
            }
        }

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_event_metadata() {
        let user_id = Uuid::new_v4();
        let event = UserEvent::registered(user_id, "alice", "alice@example.com");

        assert_eq!(event.user_id, user_id);
        assert_eq!(event.event_type(), "user.registered");

        let metadata = event.metadata();
        assert_eq!(metadata["user_id"], user_id.to_string());
        assert_eq!(metadata["username"], "alice");
        assert_eq!(metadata["email"], "alice@example.com");
    }

    #[test]
    fn test_event_ids_are_unique() {
        let user_id = Uuid::new_v4();
        let first = UserEvent::activated(user_id, "alice");
        let second = UserEvent::activated(user_id, "alice");

        assert_ne!(first.event_id, second.event_id);
    }

    #[test]
    fn test_serialization_carries_type_tag() {
        let event = UserEvent::password_changed(Uuid::new_v4(), "alice");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "password_changed");
        assert_eq!(json["username"], "alice");

        let decoded: UserEvent = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, event);
    }
}
