//! Bearer Token Middleware
//!
//! Two layers over the same access-token check:
//! - `require_auth` rejects requests without a valid token (401)
//! - `set_user` records the caller when a valid token is present and lets
//!   the request through either way

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use kernel::error::app_error::AppError;
use platform::token::TokenSigner;

/// Shared state for the token middleware
#[derive(Clone)]
pub struct AuthLayerState {
    pub signer: Arc<TokenSigner>,
}

/// Identity of an authenticated caller, inserted as a request extension
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}

/// Caller identity for routes that serve both visitors and users
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<AuthUser>);

/// Rejects the request unless a valid bearer token is presented.
pub async fn require_auth(
    State(state): State<AuthLayerState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(&request) else {
        return Err(AppError::unauthorized(
            "No token provided, authentication required",
        ));
    };

    let claims = state
        .signer
        .verify_access(&token)
        .map_err(|_| AppError::unauthorized("Invalid token, authentication failed"))?;

    request.extensions_mut().insert(AuthUser {
        id: claims.id,
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Records the caller when a valid token is present; anonymous otherwise.
pub async fn set_user(
    State(state): State<AuthLayerState>,
    mut request: Request,
    next: Next,
) -> Response {
    let user = bearer_token(&request)
        .and_then(|token| state.signer.verify_access(&token).ok())
        .map(|claims| AuthUser {
            id: claims.id,
            email: claims.email,
            role: claims.role,
        });

    request.extensions_mut().insert(MaybeAuthUser(user));

    next.run(request).await
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
}
