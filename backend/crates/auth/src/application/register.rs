//! Register Use Case
//!
//! Creates a new user account and signs it in.

use std::sync::Arc;

use platform::password::HashedPassword;
use platform::token::TokenSigner;

use crate::application::{AuthenticatedOutput, issue_tokens};
use crate::domain::entity::NewUser;
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<U, T>
where
    U: UserRepository,
    T: RefreshTokenRepository,
{
    user_repo: Arc<U>,
    token_repo: Arc<T>,
    signer: Arc<TokenSigner>,
}

impl<U, T> RegisterUseCase<U, T>
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

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<AuthenticatedOutput> {
        // Check if the email is taken
        if self.user_repo.find_by_email(&input.email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        // Hash password
        let password_hash = HashedPassword::from_plain(&input.password)?;

        // Create user with the default role
        let user = self
            .user_repo
            .create(&NewUser {
                name: input.name,
                email: input.email,
                password: password_hash.as_str().to_string(),
                role: "user".to_string(),
            })
            .await?
            .ok_or(AuthError::UserCreationFailed)?;

        let output = issue_tokens(self.token_repo.as_ref(), &self.signer, &user).await?;

        tracing::info!(user_id = user.id, email = %user.email, "User registered");

        Ok(output)
    }
}
