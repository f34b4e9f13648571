//! Logout Use Case
//!
//! Deletes the matching refresh-token row. Idempotent: logging out with a
//! token that was never stored (or already removed) succeeds.

use std::sync::Arc;

use crate::domain::repository::RefreshTokenRepository;
use crate::error::AuthResult;

/// Logout use case
pub struct LogoutUseCase<T>
where
    T: RefreshTokenRepository,
{
    token_repo: Arc<T>,
}

impl<T> LogoutUseCase<T>
where
    T: RefreshTokenRepository,
{
    pub fn new(token_repo: Arc<T>) -> Self {
        Self { token_repo }
    }

    pub async fn execute(&self, refresh_token: &str) -> AuthResult<()> {
        self.token_repo.delete_by_token(refresh_token).await?;

        tracing::info!("User logged out");
        Ok(())
    }
}
