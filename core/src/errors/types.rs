//! Specific error types for authentication, tokens and validation
//!
//! Messages are plain English; boundary layers map the stable codes from
//! [`crate::errors::DomainError::code`] to transport responses.

use thiserror::Error;

/// Authentication-related errors
///
/// `AuthenticationFailed` is the credential-mismatch kind and must map
/// to an unauthorized response at the boundary, not a validation one.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("User not found")]
    UserNotFound,

    #[error("Registration disabled")]
    RegistrationDisabled,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Missing claim: {claim}")]
    MissingClaim { claim: String },
}

/// Validation errors
///
/// `InvalidValue` carries every violated rule for a field, not just the
/// first, so callers can surface the complete violation set.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid {field}: {}", .violations.join("; "))]
    InvalidValue {
        field: String,
        violations: Vec<String>,
    },

    #[error("Illegal status transition: {from} -> {to}")]
    IllegalStatusTransition { from: String, to: String },

    #[error("Current password is incorrect")]
    IncorrectPassword,
}
