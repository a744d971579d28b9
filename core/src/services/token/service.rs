//! Main token service implementation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::collections::HashMap;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and validating signed, self-contained tokens
///
/// Tokens are HS256 JWTs keyed by username. Issuance and validation are
/// pure computations; the only shared state is the read-only signing key
/// decoded from configuration at construction time. Rotating the secret
/// invalidates every outstanding token.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service
    ///
    /// # Returns
    ///
    /// * `Ok(TokenService)` - Service ready to issue and verify tokens
    /// * `Err(DomainError)` - The configured secret is not valid base64
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        let secret =
            BASE64
                .decode(config.secret_key.as_bytes())
                .map_err(|e| DomainError::Internal {
                    message: format!("signing secret is not valid base64: {}", e),
                })?;

        let encoding_key = EncodingKey::from_secret(&secret);
        let decoding_key = DecodingKey::from_secret(&secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        // Expiry is checked explicitly so expired tokens stay inspectable.
        validation.validate_exp = false;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Generates an access token for a subject
    pub fn generate(&self, subject: &str) -> DomainResult<String> {
        self.generate_with_claims(subject, HashMap::new())
    }

    /// Generates an access token carrying extra claims
    ///
    /// Extra claims are flattened into the payload alongside the
    /// standard ones.
    pub fn generate_with_claims(
        &self,
        subject: &str,
        extra: HashMap<String, serde_json::Value>,
    ) -> DomainResult<String> {
        let claims = Claims::new(
            subject,
            self.config.access_ttl_ms,
            &self.config.issuer,
            &self.config.audience,
            extra,
        );
        self.encode_jwt(&claims)
    }

    /// Generates a refresh token for a subject
    ///
    /// Same shape as an access token, with the longer refresh TTL.
    pub fn generate_refresh(&self, subject: &str) -> DomainResult<String> {
        let claims = Claims::new(
            subject,
            self.config.refresh_ttl_ms,
            &self.config.issuer,
            &self.config.audience,
            HashMap::new(),
        );
        self.encode_jwt(&claims)
    }

    /// Decodes a token after verifying its signature, issuer and audience
    ///
    /// Expiry is NOT enforced here; use [`TokenService::is_valid`] or
    /// [`TokenService::is_expired`] for that.
    pub fn decode(&self, token: &str) -> DomainResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        DomainError::Token(TokenError::InvalidSignature)
                    }
                    _ => DomainError::Token(TokenError::InvalidTokenFormat),
                }
            })?;
        Ok(token_data.claims)
    }

    /// Extracts the subject from a token after verifying its signature
    pub fn extract_subject(&self, token: &str) -> DomainResult<String> {
        let claims = self.decode(token)?;
        if claims.sub.is_empty() {
            return Err(DomainError::Token(TokenError::MissingClaim {
                claim: "sub".to_string(),
            }));
        }
        Ok(claims.sub)
    }

    /// Checks whether a token is valid for the expected subject
    ///
    /// True iff the signature verifies, the subject matches and the
    /// token has not expired.
    pub fn is_valid(&self, token: &str, expected_subject: &str) -> bool {
        match self.decode(token) {
            Ok(claims) => claims.sub == expected_subject && !claims.is_expired(),
            Err(_) => false,
        }
    }

    /// Checks whether a token has expired
    ///
    /// Tokens that cannot be decoded count as expired.
    pub fn is_expired(&self, token: &str) -> bool {
        self.decode(token)
            .map(|claims| claims.is_expired())
            .unwrap_or(true)
    }

    /// Access token TTL in seconds, for response metadata
    pub fn access_expires_in(&self) -> i64 {
        self.config.access_ttl_ms / 1000
    }

    /// Refresh token TTL in seconds, for response metadata
    pub fn refresh_expires_in(&self) -> i64 {
        self.config.refresh_ttl_ms / 1000
    }

    fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}
