//! Token claims and response shapes for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Additional claims flattened into the payload
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    /// Creates claims for a token expiring `ttl_ms` from now
    pub fn new(
        subject: &str,
        ttl_ms: i64,
        issuer: &str,
        audience: &str,
        extra: HashMap<String, serde_json::Value>,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::milliseconds(ttl_ms);

        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            extra,
        }
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with its expiry metadata in seconds
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_claims_not_expired() {
        let claims = Claims::new("alice", 900_000, "identra", "identra-api", HashMap::new());

        assert_eq!(claims.sub, "alice");
        assert_eq!(claims.iss, "identra");
        assert_eq!(claims.aud, "identra-api");
        assert!(!claims.is_expired());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_zero_ttl_claims_expired_immediately() {
        let claims = Claims::new("alice", 0, "identra", "identra-api", HashMap::new());
        assert!(claims.is_expired());
    }

    #[test]
    fn test_extra_claims_flattened() {
        let mut extra = HashMap::new();
        extra.insert("role".to_string(), serde_json::json!("admin"));

        let claims = Claims::new("alice", 900_000, "identra", "identra-api", extra);
        let json = serde_json::to_value(&claims).unwrap();

        assert_eq!(json["role"], "admin");
        assert_eq!(json["sub"], "alice");

        let decoded: Claims = serde_json::from_value(json).unwrap();
        assert_eq!(decoded.extra["role"], "admin");
    }

    #[test]
    fn test_token_pair_shape() {
        let pair = TokenPair::new(
            "access".to_string(),
            "refresh".to_string(),
            900,
            604_800,
        );

        assert_eq!(pair.access_token, "access");
        assert_eq!(pair.refresh_token, "refresh");
        assert_eq!(pair.access_expires_in, 900);
        assert_eq!(pair.refresh_expires_in, 604_800);
    }
}
