//! Configuration for the token service

use id_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Base64-encoded symmetric signing secret
    pub secret_key: String,

    /// Access token time-to-live in milliseconds
    pub access_ttl_ms: i64,

    /// Refresh token time-to-live in milliseconds
    pub refresh_ttl_ms: i64,

    /// Issuer claim stamped into and required from every token
    pub issuer: String,

    /// Audience claim stamped into and required from every token
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret_key: config.secret_key.clone(),
            access_ttl_ms: config.access_ttl_ms,
            refresh_ttl_ms: config.refresh_ttl_ms,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}
