//! Authentication response value objects for API responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Account summary embedded in authentication responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique identifier of the account
    pub id: Uuid,

    /// Normalized username
    pub username: String,

    /// Normalized email address
    pub email: String,

    /// Current account status
    pub status: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            status: user.status().as_str().to_string(),
        }
    }
}

/// Authentication response containing tokens and account metadata
///
/// `expires_in` is derived from the token service configuration, so the
/// advertised window always matches the real access-token expiration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,

    /// Summary of the authenticated account
    pub user: UserSummary,
}

impl AuthResponse {
    /// Creates a new authentication response
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: UserSummary,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            user,
        }
    }
}
