//! JWT Lesson Router

use std::sync::Arc;

use axum::{Router, routing::post};

use crate::application::config::JwtConfig;
use crate::domain::repository::RefreshTokenRepository;
use crate::domain::services::JwtTokenService;
use crate::infra::memory::InMemoryRefreshTokenStore;
use crate::presentation::handlers::{self, JwtAppState};

/// Create the JWT lesson router with the in-memory refresh token set
pub fn jwt_router(store: InMemoryRefreshTokenStore, config: JwtConfig) -> Router {
    jwt_router_generic(store, config)
}

/// Create a generic JWT lesson router for any refresh token repository
pub fn jwt_router_generic<R>(repo: R, config: JwtConfig) -> Router
where
    R: RefreshTokenRepository + Clone + Send + Sync + 'static,
{
    let tokens = JwtTokenService::new(config.signing_key(), config.access_token_ttl);
    let state = JwtAppState {
        repo: Arc::new(repo),
        tokens: Arc::new(tokens),
        config: Arc::new(config),
    };

    Router::new()
        .route("/JWT/refresh/login", post(handlers::login::<R>))
        .route("/JWT/refresh/checkout", post(handlers::checkout::<R>))
        .route("/JWT/refresh/newToken", post(handlers::new_token::<R>))
        .with_state(state)
}
