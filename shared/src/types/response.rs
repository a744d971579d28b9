//! Error response structure shared across API boundaries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure
///
/// Carries a stable machine-readable code plus a human-readable message
/// so boundary layers can map domain failures to transport-specific
/// responses without inspecting concrete error types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field violations, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const DUPLICATE_ENTITY: &str = "DUPLICATE_ENTITY";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const AUTHENTICATION_FAILED: &str = "AUTHENTICATION_FAILED";
    pub const REGISTRATION_DISABLED: &str = "REGISTRATION_DISABLED";
    pub const TOKEN_EXPIRED: &str = "TOKEN_EXPIRED";
    pub const TOKEN_INVALID: &str = "TOKEN_INVALID";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_with_details() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid username")
            .with_detail("field", "username")
            .with_detail("violations", vec!["too short"]);

        assert_eq!(response.error, "VALIDATION_ERROR");
        assert_eq!(response.message, "Invalid username");

        let details = response.details.unwrap();
        assert_eq!(details["field"], "username");
        assert_eq!(details["violations"], serde_json::json!(["too short"]));
    }
}
