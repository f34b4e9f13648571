//! Auth HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use kernel::response::{ApiMessage, ApiResponse};
use platform::token::TokenSigner;

use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::logout::LogoutUseCase;
use crate::application::refresh::RefreshTokenUseCase;
use crate::application::register::{RegisterInput, RegisterUseCase};
use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::error::AuthError;
use crate::presentation::dto::{
    AuthDataDto, LoginRequest, RefreshDataDto, RefreshRequest, RegisterRequest,
};

/// Shared state for the auth routes
#[derive(Clone)]
pub struct AuthAppState<R> {
    pub repo: Arc<R>,
    pub signer: Arc<TokenSigner>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + RefreshTokenRepository,
{
    pub fn new(repo: Arc<R>, signer: Arc<TokenSigner>) -> Self {
        Self { repo, signer }
    }
}

/// POST /auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthDataDto>>), AuthError>
where
    R: UserRepository + RefreshTokenRepository,
{
    payload.validate()?;

    let use_case = RegisterUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.signer),
    );

    let output = use_case
        .execute(RegisterInput {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(AuthDataDto::from(output))),
    ))
}

/// POST /auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthDataDto>>, AuthError>
where
    R: UserRepository + RefreshTokenRepository,
{
    payload.validate()?;

    let use_case = LoginUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.signer),
    );

    let output = use_case
        .execute(LoginInput {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Json(ApiResponse::new(AuthDataDto::from(output))))
}

/// POST /auth/refresh
pub async fn refresh<R>(
    State(state): State<AuthAppState<R>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<RefreshDataDto>>, AuthError>
where
    R: UserRepository + RefreshTokenRepository,
{
    payload.validate()?;

    let use_case = RefreshTokenUseCase::new(
        Arc::clone(&state.repo),
        Arc::clone(&state.repo),
        Arc::clone(&state.signer),
    );

    let access_token = use_case.execute(&payload.refresh_token).await?;

    Ok(Json(ApiResponse::new(RefreshDataDto { access_token })))
}

/// POST /auth/logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<ApiMessage>, AuthError>
where
    R: UserRepository + RefreshTokenRepository,
{
    payload.validate()?;

    let use_case = LogoutUseCase::new(Arc::clone(&state.repo));
    use_case.execute(&payload.refresh_token).await?;

    Ok(Json(ApiMessage::new("Logged out successfully")))
}
