//! Auth Use Cases

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use login::{LoginInput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use refresh::RefreshTokenUseCase;
pub use register::{RegisterInput, RegisterUseCase};

use chrono::{Duration as ChronoDuration, Utc};
use platform::token::TokenSigner;

use crate::domain::entity::{PublicUser, User};
use crate::domain::repository::RefreshTokenRepository;
use crate::error::{AuthError, AuthResult};

/// Result of a successful register or login: the user (sans password) and a
/// freshly issued token pair.
#[derive(Debug)]
pub struct AuthenticatedOutput {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

/// Issue an access+refresh pair for `user` and persist the refresh token
/// with `expires = now + refresh TTL`.
///
/// Shared by register and login; both deliberately create a new row, so
/// concurrent logins yield multiple simultaneously valid refresh tokens.
pub(crate) async fn issue_tokens<T>(
    token_repo: &T,
    signer: &TokenSigner,
    user: &User,
) -> AuthResult<AuthenticatedOutput>
where
    T: RefreshTokenRepository,
{
    let access_token = signer.generate_access_token(user.id, &user.email, &user.role)?;
    let refresh_token = signer.generate_refresh_token(user.id)?;

    let ttl = ChronoDuration::from_std(signer.refresh_ttl())
        .map_err(|e| AuthError::Internal(format!("Invalid refresh TTL: {e}")))?;
    let expires = Utc::now() + ttl;

    token_repo.create(&refresh_token, user.id, expires).await?;

    Ok(AuthenticatedOutput {
        user: user.public(),
        access_token,
        refresh_token,
    })
}
