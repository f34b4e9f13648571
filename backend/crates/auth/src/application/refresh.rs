//! Refresh Token Use Case
//!
//! Exchanges a stored refresh token for a new access token. The presented
//! refresh token is NOT rotated; it stays valid until its stored expiry or
//! an explicit logout.

use std::sync::Arc;

use platform::token::TokenSigner;

use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Refresh use case
pub struct RefreshTokenUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    signer: Arc<TokenSigner>,
}

impl<U, T> RefreshTokenUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, signer: Arc<TokenSigner>) -> Self {
        Self {
            user_repo,
            token_repo,
            signer,
        }
    }

    /// Returns a freshly signed access token.
    pub async fn execute(&self, refresh_token: &str) -> AuthResult<String> {
        // The token must still exist server-side
        let stored = self
            .token_repo
            .find_by_token(refresh_token)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        // Stored expiry is authoritative; an expired row is removed on sight
        if stored.is_expired() {
            self.token_repo.delete_by_id(stored.id).await?;
            return Err(AuthError::RefreshTokenExpired);
        }

        // Cryptographic check against the refresh secret. Verification
        // failure and a missing user both collapse to the same 401.
        self.signer
            .verify_refresh(refresh_token)
            .map_err(|_| AuthError::InvalidRefreshToken)?;

        let user = self
            .user_repo
            .find_by_id(stored.user_id)
            .await?
            .ok_or(AuthError::InvalidRefreshToken)?;

        let access_token = self
            .signer
            .generate_access_token(user.id, &user.email, &user.role)?;

        tracing::debug!(user_id = user.id, "Access token refreshed");

        Ok(access_token)
    }
}
