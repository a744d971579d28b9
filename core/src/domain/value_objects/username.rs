//! Username value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Minimum username length
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length
pub const USERNAME_MAX_LENGTH: usize = 20;

/// Usernames that can never be registered
const RESERVED_USERNAMES: &[&str] = &["admin", "administrator", "root", "support", "system"];

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Validated, normalized username
///
/// Normalization trims surrounding whitespace; the value itself stays
/// case-sensitive. Comparison and hashing use the normalized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Creates a username from raw input
    ///
    /// Every violated rule is reported, not just the first.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            });
        }

        let mut violations = Vec::new();

        if value.len() < USERNAME_MIN_LENGTH || value.len() > USERNAME_MAX_LENGTH {
            violations.push(format!(
                "must be between {} and {} characters",
                USERNAME_MIN_LENGTH, USERNAME_MAX_LENGTH
            ));
        }
        if !USERNAME_REGEX.is_match(value) {
            violations
                .push("may only contain letters, digits, underscores and hyphens".to_string());
        }
        if RESERVED_USERNAMES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(value))
        {
            violations.push(format!("'{}' is reserved", value));
        }

        if violations.is_empty() {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::InvalidValue {
                field: "username".to_string(),
                violations,
            })
        }
    }

    /// Returns the normalized value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value object, returning the inner string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let username = Username::new("alice_01").unwrap();
        assert_eq!(username.as_str(), "alice_01");
    }

    #[test]
    fn test_normalization_trims_and_is_idempotent() {
        let first = Username::new(" Bob ").unwrap();
        let second = Username::new(first.as_str()).unwrap();

        assert_eq!(first.as_str(), "Bob");
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_is_required_field() {
        assert!(matches!(
            Username::new("   "),
            Err(ValidationError::RequiredField { .. })
        ));
    }

    #[test]
    fn test_length_bounds() {
        assert!(Username::new("ab").is_err());
        assert!(Username::new("abc").is_ok());
        assert!(Username::new(&"a".repeat(20)).is_ok());
        assert!(Username::new(&"a".repeat(21)).is_err());
    }

    #[test]
    fn test_invalid_characters() {
        assert!(Username::new("alice!").is_err());
        assert!(Username::new("al ice").is_err());
        assert!(Username::new("alice-01_x").is_ok());
    }

    #[test]
    fn test_reserved_names_case_insensitive() {
        for name in ["admin", "Admin", "SYSTEM", "support"] {
            assert!(Username::new(name).is_err(), "{} should be reserved", name);
        }
    }

    #[test]
    fn test_all_violations_reported() {
        let err = Username::new("a!").unwrap_err();

        match err {
            ValidationError::InvalidValue { field, violations } => {
                assert_eq!(field, "username");
                assert_eq!(violations.len(), 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_case_sensitive_equality() {
        let lower = Username::new("bob").unwrap();
        let upper = Username::new("Bob").unwrap();
        assert_ne!(lower, upper);
    }
}
