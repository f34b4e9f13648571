//! Auth Route Table

use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use platform::token::TokenSigner;

use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::infra::postgres::PgAuthRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Auth router over the PostgreSQL repository
pub fn auth_router(repo: PgAuthRepository, signer: Arc<TokenSigner>) -> Router {
    auth_router_with(Arc::new(repo), signer)
}

/// Auth router over any repository implementation
pub fn auth_router_with<R>(repo: Arc<R>, signer: Arc<TokenSigner>) -> Router
where
    R: UserRepository + RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState::new(repo, signer);

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .route("/refresh", post(handlers::refresh::<R>))
        .route("/logout", post(handlers::logout::<R>))
        .with_state(state)
}
