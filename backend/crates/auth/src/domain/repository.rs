//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};

use crate::domain::entity::{NewUser, RefreshToken, User};
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, returning the stored row (None if the insert
    /// yielded no row)
    async fn create(&self, user: &NewUser) -> AuthResult<Option<User>>;

    /// Find user by id
    async fn find_by_id(&self, id: i64) -> AuthResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;
}

/// Refresh token repository trait
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Persist a newly issued refresh token
    async fn create(
        &self,
        token: &str,
        user_id: i64,
        expires: DateTime<Utc>,
    ) -> AuthResult<RefreshToken>;

    /// Look up a token row by its opaque string
    async fn find_by_token(&self, token: &str) -> AuthResult<Option<RefreshToken>>;

    /// Delete a token row by id (detected-expiry path)
    async fn delete_by_id(&self, id: i64) -> AuthResult<()>;

    /// Delete a token row by its string (logout; absence is not an error)
    async fn delete_by_token(&self, token: &str) -> AuthResult<()>;

    /// Clean up rows whose stored expiry has passed
    async fn delete_expired(&self) -> AuthResult<u64>;
}
