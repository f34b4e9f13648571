//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities and repository traits
//! - `application/` - Use cases (register, login, refresh, logout)
//! - `infra/` - PostgreSQL repository implementation
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - User registration and login with email + password
//! - JWT access tokens (short-lived) and refresh tokens (long-lived,
//!   persisted server-side, exchanged for new access tokens)
//! - Bearer-token middleware for protected and optional-identity routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id
//! - Login failures report one generic message for unknown email and wrong
//!   password alike
//! - Refresh tokens are deleted on logout and on detected expiry; they are
//!   NOT rotated on refresh

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{AuthLayerState, AuthUser, MaybeAuthUser};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
