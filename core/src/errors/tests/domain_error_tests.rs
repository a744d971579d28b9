//! Unit tests for domain error mapping

use id_shared::types::response::error_codes;

use crate::errors::{AuthError, DomainError, ErrorResponse, TokenError, ValidationError};

#[test]
fn test_error_codes() {
    let duplicate = DomainError::Duplicate {
        field: "username".to_string(),
        value: "alice".to_string(),
    };
    assert_eq!(duplicate.code(), error_codes::DUPLICATE_ENTITY);

    assert_eq!(
        DomainError::from(AuthError::AuthenticationFailed).code(),
        error_codes::AUTHENTICATION_FAILED
    );
    assert_eq!(
        DomainError::from(AuthError::UserNotFound).code(),
        error_codes::NOT_FOUND
    );
    assert_eq!(
        DomainError::from(TokenError::TokenExpired).code(),
        error_codes::TOKEN_EXPIRED
    );
    assert_eq!(
        DomainError::from(TokenError::InvalidSignature).code(),
        error_codes::TOKEN_INVALID
    );
    assert_eq!(
        DomainError::from(ValidationError::IncorrectPassword).code(),
        error_codes::VALIDATION_ERROR
    );
}

#[test]
fn test_aggregated_violations_in_message() {
    let err = ValidationError::InvalidValue {
        field: "username".to_string(),
        violations: vec![
            "must be between 3 and 20 characters".to_string(),
            "may only contain letters, digits, underscores and hyphens".to_string(),
        ],
    };

    let message = err.to_string();
    assert!(message.contains("username"));
    assert!(message.contains("between 3 and 20"));
    assert!(message.contains("letters, digits"));
}

#[test]
fn test_transparent_bridge_message() {
    let err: DomainError = TokenError::InvalidRefreshToken.into();
    assert_eq!(err.to_string(), "Invalid refresh token");
}

#[test]
fn test_error_response_conversion() {
    let err = DomainError::NotFound {
        resource: "user 123".to_string(),
    };

    let response = ErrorResponse::from(&err);
    assert_eq!(response.error, error_codes::NOT_FOUND);
    assert!(response.message.contains("user 123"));
}
