//! Login Use Case
//!
//! Authenticates a user by email + password and issues a token pair.

use std::sync::Arc;

use platform::password::HashedPassword;
use platform::token::TokenSigner;

use crate::application::{AuthenticatedOutput, issue_tokens};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login use case
pub struct LoginUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    signer: Arc<TokenSigner>,
}

impl<U, T> LoginUseCase<U, T>
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

    pub async fn execute(&self, input: LoginInput) -> AuthResult<AuthenticatedOutput> {
        // Unknown email and wrong password take the same error path
        let user = self
            .user_repo
            .find_by_email(&input.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let stored = HashedPassword::from_phc_string(user.password.clone())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !stored.verify(&input.password) {
            return Err(AuthError::InvalidCredentials);
        }

        let output = issue_tokens(self.token_repo.as_ref(), &self.signer, &user).await?;

        tracing::info!(user_id = user.id, "User logged in");

        Ok(output)
    }
}
