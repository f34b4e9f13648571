//! JWT Token Signing and Verification
//!
//! Issues and validates the two-token credential pair:
//! - access token: short-lived, payload `{id, email, role, exp}`
//! - refresh token: long-lived, payload `{id, exp}`
//!
//! Each kind is signed with its own HS256 secret. Verification failures
//! (bad signature, expired, malformed, wrong kind of token) all collapse to
//! [`TokenError::Invalid`] so callers cannot distinguish them.

use std::time::Duration;

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    get_current_timestamp,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default access token lifetime (1 hour).
pub const DEFAULT_ACCESS_TTL: Duration = Duration::from_secs(60 * 60);

/// Default refresh token lifetime (7 days).
pub const DEFAULT_REFRESH_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Token signing/verification errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature invalid, token expired, or token malformed
    #[error("Invalid or expired token")]
    Invalid,

    /// Signing failed
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Access token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub id: i64,
    pub email: String,
    pub role: String,
    pub exp: u64,
}

/// Refresh token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub id: i64,
    pub exp: u64,
}

/// Signer/verifier for the access/refresh token pair.
///
/// Built once at startup from configuration and shared via `Arc`.
#[derive(Clone)]
pub struct TokenSigner {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenSigner {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl: Duration,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Access token lifetime.
    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    /// Refresh token lifetime. Also used for the stored `expires` column.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Sign a short-lived access token carrying the user's identity.
    pub fn generate_access_token(
        &self,
        user_id: i64,
        email: &str,
        role: &str,
    ) -> Result<String, TokenError> {
        let claims = AccessClaims {
            id: user_id,
            email: email.to_string(),
            role: role.to_string(),
            exp: get_current_timestamp() + self.access_ttl.as_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.access_encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Sign a long-lived refresh token carrying only the user id.
    pub fn generate_refresh_token(&self, user_id: i64) -> Result<String, TokenError> {
        let claims = RefreshClaims {
            id: user_id,
            exp: get_current_timestamp() + self.refresh_ttl.as_secs(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.refresh_encoding)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify an access token against the access secret.
    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        decode::<AccessClaims>(token, &self.access_decoding, &hs256_validation())
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }

    /// Verify a refresh token against the refresh secret.
    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        decode::<RefreshClaims>(token, &self.refresh_decoding, &hs256_validation())
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)
    }
}

fn hs256_validation() -> Validation {
    Validation::new(Algorithm::HS256)
}

impl std::fmt::Debug for TokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenSigner")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(
            "test_access_secret",
            "test_refresh_secret",
            DEFAULT_ACCESS_TTL,
            DEFAULT_REFRESH_TTL,
        )
    }

    #[test]
    fn test_access_token_roundtrip() {
        let signer = signer();
        let token = signer
            .generate_access_token(42, "alice@example.com", "user")
            .unwrap();

        let claims = signer.verify_access(&token).unwrap();
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.role, "user");
    }

    #[test]
    fn test_access_token_expiry_within_ttl() {
        let signer = signer();
        let token = signer.generate_access_token(1, "a@b.com", "user").unwrap();
        let claims = signer.verify_access(&token).unwrap();

        assert!(claims.exp <= get_current_timestamp() + DEFAULT_ACCESS_TTL.as_secs());
        assert!(claims.exp > get_current_timestamp());
    }

    #[test]
    fn test_refresh_token_roundtrip() {
        let signer = signer();
        let token = signer.generate_refresh_token(7).unwrap();

        let claims = signer.verify_refresh(&token).unwrap();
        assert_eq!(claims.id, 7);
    }

    #[test]
    fn test_secrets_are_not_interchangeable() {
        let signer = signer();
        let access = signer.generate_access_token(1, "a@b.com", "user").unwrap();
        let refresh = signer.generate_refresh_token(1).unwrap();

        // An access token does not verify as a refresh token and vice versa
        assert!(signer.verify_refresh(&access).is_err());
        assert!(matches!(
            signer.verify_access(&refresh),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = signer();
        let other = TokenSigner::new(
            "different_access_secret",
            "different_refresh_secret",
            DEFAULT_ACCESS_TTL,
            DEFAULT_REFRESH_TTL,
        );

        let token = signer.generate_access_token(1, "a@b.com", "user").unwrap();
        assert!(other.verify_access(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let signer = signer();
        assert!(matches!(
            signer.verify_access("not.a.jwt"),
            Err(TokenError::Invalid)
        ));
        assert!(signer.verify_refresh("").is_err());
    }
}
