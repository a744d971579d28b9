//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Maximum email length
pub const EMAIL_MAX_LENGTH: usize = 255;

/// Domains rejected at registration, mostly disposable-mail providers
const BLOCKED_DOMAINS: &[&str] = &[
    "mailinator.com",
    "guerrillamail.com",
    "10minutemail.com",
    "tempmail.com",
];

// Applied after lowercasing, so lowercase classes suffice.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}$").unwrap());

/// Validated, normalized email address
///
/// Normalization trims surrounding whitespace and lowercases the value.
/// Comparison and hashing use the normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates an email from raw input
    ///
    /// Every violated rule is reported, not just the first.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim().to_lowercase();
        if value.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            });
        }

        let mut violations = Vec::new();

        if value.len() > EMAIL_MAX_LENGTH {
            violations.push(format!("must not exceed {} characters", EMAIL_MAX_LENGTH));
        }
        if !EMAIL_REGEX.is_match(&value) {
            violations.push("is not a valid email address".to_string());
        }
        if let Some(domain) = value.split('@').nth(1) {
            if BLOCKED_DOMAINS.contains(&domain) {
                violations.push(format!("domain '{}' is not allowed", domain));
            }
        }

        if violations.is_empty() {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidValue {
                field: "email".to_string(),
                violations,
            })
        }
    }

    /// Returns the normalized value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part of the address
    pub fn domain(&self) -> &str {
        self.0.split('@').nth(1).unwrap_or("")
    }

    /// Consumes the value object, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("alice@example.com").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_normalization_trims_and_lowercases() {
        let email = Email::new("  Alice@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
    }

    #[test]
    fn test_equality_by_normalized_value() {
        let a = Email::new("Alice@example.com").unwrap();
        let b = Email::new("alice@EXAMPLE.com").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_is_required_field() {
        assert!(matches!(
            Email::new(""),
            Err(ValidationError::RequiredField { .. })
        ));
    }

    #[test]
    fn test_malformed_addresses_rejected() {
        for raw in ["not-an-email", "@example.com", "alice@", "alice@host", "a b@example.com"] {
            assert!(Email::new(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_length_limit() {
        let local = "a".repeat(EMAIL_MAX_LENGTH);
        let raw = format!("{}@example.com", local);
        assert!(Email::new(&raw).is_err());
    }

    #[test]
    fn test_blocked_domains_rejected() {
        let err = Email::new("alice@Mailinator.com").unwrap_err();

        match err {
            ValidationError::InvalidValue { violations, .. } => {
                assert!(violations.iter().any(|v| v.contains("mailinator.com")));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
