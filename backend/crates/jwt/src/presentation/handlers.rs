//! HTTP Handlers

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use kernel::AttackResult;
use platform::header::extract_bearer_token;
use serde::de::DeserializeOwned;

use crate::application::checkout::CheckoutUseCase;
use crate::application::config::JwtConfig;
use crate::application::login::{LoginInput, LoginUseCase};
use crate::application::refresh::{RefreshInput, RefreshTokenUseCase};
use crate::domain::repository::RefreshTokenRepository;
use crate::domain::services::JwtTokenService;
use crate::error::{JwtError, JwtResult};
use crate::presentation::dto::{LoginRequest, RefreshRequest, TokenResponse};

/// Shared state for JWT lesson handlers
#[derive(Clone)]
pub struct JwtAppState<R>
where
    R: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<JwtTokenService>,
    pub config: Arc<JwtConfig>,
}

/// POST /JWT/refresh/login
pub async fn login<R>(
    State(state): State<JwtAppState<R>>,
    body: Bytes,
) -> JwtResult<Json<TokenResponse>>
where
    R: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let req: LoginRequest = parse_json_body(&body).ok_or(JwtError::MissingCredentials)?;

    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case
        .execute(LoginInput {
            user: req.user,
            password: req.password,
        })
        .await?;

    Ok(Json(pair.into()))
}

/// POST /JWT/refresh/checkout
pub async fn checkout<R>(
    State(state): State<JwtAppState<R>>,
    headers: HeaderMap,
) -> JwtResult<AttackResult>
where
    R: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).ok_or(JwtError::MissingCredentials)?;

    let use_case = CheckoutUseCase::new(state.tokens.clone());

    Ok(use_case.execute(&token))
}

/// POST /JWT/refresh/newToken
pub async fn new_token<R>(
    State(state): State<JwtAppState<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> JwtResult<Json<TokenResponse>>
where
    R: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let access_token = extract_bearer_token(&headers).ok_or(JwtError::MissingCredentials)?;
    let req: RefreshRequest = parse_json_body(&body).ok_or(JwtError::MissingCredentials)?;

    let use_case = RefreshTokenUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let pair = use_case
        .execute(RefreshInput {
            access_token,
            refresh_token: req.refresh_token,
        })
        .await?;

    Ok(Json(pair.into()))
}

/// Empty or unparsable bodies count as missing
fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> Option<T> {
    if body.is_empty() {
        return None;
    }
    serde_json::from_slice(body).ok()
}
