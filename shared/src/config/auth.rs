//! Authentication configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default signing secret, base64 of a development-only value.
const DEFAULT_SECRET_KEY: &str = "aWRlbnRyYS1kZXZlbG9wbWVudC1zZWNyZXQtY2hhbmdlLWluLXByb2R1Y3Rpb24=";

/// JWT authentication configuration
///
/// The secret is a base64-encoded symmetric key shared by every token
/// issued by a deployment. There is no rotation mechanism: changing the
/// secret invalidates all outstanding tokens.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Base64-encoded symmetric signing key
    pub secret_key: String,

    /// Access token time-to-live in milliseconds
    pub access_ttl_ms: i64,

    /// Refresh token time-to-live in milliseconds
    pub refresh_ttl_ms: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret_key: String::from(DEFAULT_SECRET_KEY),
            access_ttl_ms: 900_000,        // 15 minutes
            refresh_ttl_ms: 604_800_000,   // 7 days
            issuer: String::from("identra"),
            audience: String::from("identra-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given base64 secret
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_ttl_ms = minutes * 60_000;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_ttl_ms = days * 86_400_000;
        self
    }

    /// Load configuration from environment variables
    ///
    /// Reads `AUTH_SECRET_KEY`, `AUTH_ACCESS_TTL_MS` and
    /// `AUTH_REFRESH_TTL_MS`; unset or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret_key: env::var("AUTH_SECRET_KEY").unwrap_or(defaults.secret_key),
            access_ttl_ms: env::var("AUTH_ACCESS_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_ttl_ms),
            refresh_ttl_ms: env::var("AUTH_REFRESH_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_ttl_ms),
            issuer: defaults.issuer,
            audience: defaults.audience,
        }
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}
