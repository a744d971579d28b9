//! Password value object holding a one-way hash.

use std::fmt;

use crate::errors::{DomainError, ValidationError};

/// Minimum plaintext length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum plaintext length
pub const PASSWORD_MAX_LENGTH: usize = 100;

/// Special characters accepted by the strength rules
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>/?";

/// Fixed bcrypt work factor
const BCRYPT_COST: u32 = 10;

/// One-way hashed credential
///
/// The plaintext is hashed on construction and never stored; bcrypt
/// embeds its own salt in the hash. Equality compares hash values.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

impl Password {
    /// Hashes a plaintext password after checking the strength rules
    pub fn new(plaintext: &str) -> Result<Self, DomainError> {
        Self::validate_strength(plaintext)?;

        let hash = bcrypt::hash(plaintext, BCRYPT_COST).map_err(|e| DomainError::Internal {
            message: format!("password hashing failed: {}", e),
        })?;

        Ok(Self { hash })
    }

    /// Rebuilds a password from a stored hash, skipping strength checks
    ///
    /// The caller is responsible for the hash being well-formed.
    pub fn from_hash(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Verifies a candidate against the stored hash
    ///
    /// Empty candidates never match. Verification is delegated to
    /// bcrypt, which compares the full digest rather than short-
    /// circuiting on a prefix mismatch.
    pub fn matches(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        bcrypt::verify(candidate, &self.hash).unwrap_or(false)
    }

    /// Stored hash, for persistence adapters
    pub fn hash(&self) -> &str {
        &self.hash
    }

    fn validate_strength(plaintext: &str) -> Result<(), ValidationError> {
        if plaintext.is_empty() {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            });
        }

        let mut violations = Vec::new();
        let length = plaintext.chars().count();

        if length < PASSWORD_MIN_LENGTH || length > PASSWORD_MAX_LENGTH {
            violations.push(format!(
                "must be between {} and {} characters",
                PASSWORD_MIN_LENGTH, PASSWORD_MAX_LENGTH
            ));
        }
        if !plaintext.chars().any(|c| c.is_ascii_lowercase()) {
            violations.push("must contain a lowercase letter".to_string());
        }
        if !plaintext.chars().any(|c| c.is_ascii_uppercase()) {
            violations.push("must contain an uppercase letter".to_string());
        }
        if !plaintext.chars().any(|c| c.is_ascii_digit()) {
            violations.push("must contain a digit".to_string());
        }
        if !plaintext.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)) {
            violations.push("must contain a special character".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue {
                field: "password".to_string(),
                violations,
            })
        }
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

// Neither the plaintext nor the hash ever appears in debug output.
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
