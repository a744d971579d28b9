//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError, ValidationError};

// Re-export the shared response envelope for boundary layers
pub use id_shared::types::response::ErrorResponse;

use id_shared::types::response::error_codes;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Duplicate {field}: {value}")]
    Duplicate { field: String, value: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for boundary-layer mapping
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
            DomainError::Duplicate { .. } => error_codes::DUPLICATE_ENTITY,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(AuthError::AuthenticationFailed) => {
                error_codes::AUTHENTICATION_FAILED
            }
            DomainError::Auth(AuthError::UserNotFound) => error_codes::NOT_FOUND,
            DomainError::Auth(AuthError::RegistrationDisabled) => {
                error_codes::REGISTRATION_DISABLED
            }
            DomainError::Token(TokenError::TokenExpired) => error_codes::TOKEN_EXPIRED,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
            DomainError::ValidationErr(_) => error_codes::VALIDATION_ERROR,
        }
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.code(), err.to_string())
    }
}
