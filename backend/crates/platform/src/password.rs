//! Password Hashing and Verification
//!
//! Argon2id hashing (memory-hard, recommended by OWASP) over PHC-formatted
//! strings. The PHC string embeds algorithm, parameters and salt, so
//! verification needs nothing but the stored string and the candidate
//! password. Complexity policy is enforced at the request-validation layer,
//! not here.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Hashed password in PHC string format, safe to store and to clone.
///
/// ## Examples
/// ```rust
/// use platform::password::HashedPassword;
///
/// let hashed = HashedPassword::from_plain("Sup3r$ecret").unwrap();
/// assert!(hashed.verify("Sup3r$ecret"));
/// assert!(!hashed.verify("wrong"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Salt and hash a plaintext password with Argon2id.
    pub fn from_plain(plain: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(OsRng);

        // Default parameters are the OWASP-recommended Argon2id set:
        // m=19456 (19 MiB), t=2, p=1
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Wrap a PHC string loaded from the database.
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// PHC string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plaintext password against this hash.
    ///
    /// Argon2 performs the comparison in constant time. A malformed stored
    /// hash verifies as `false` rather than erroring.
    pub fn verify(&self, plain: &str) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = HashedPassword::from_plain("TestPassword123!").unwrap();

        assert!(hashed.verify("TestPassword123!"));
        assert!(!hashed.verify("WrongPassword123!"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = HashedPassword::from_plain("TestPassword123!").unwrap();
        let b = HashedPassword::from_plain("TestPassword123!").unwrap();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hashed = HashedPassword::from_plain("TestPassword123!").unwrap();

        let phc_string = hashed.as_str().to_string();
        let restored = HashedPassword::from_phc_string(phc_string).unwrap();

        assert!(restored.verify("TestPassword123!"));
    }

    #[test]
    fn test_invalid_phc_string() {
        let result = HashedPassword::from_phc_string("not_a_valid_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let hashed = HashedPassword::from_plain("secret-enough").unwrap();
        let debug_output = format!("{:?}", hashed);
        assert!(debug_output.contains("[HASH]"));
        assert!(!debug_output.contains("secret-enough"));
    }
}
