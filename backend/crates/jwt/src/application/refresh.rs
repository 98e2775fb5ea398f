//! Refresh Token Exchange Use Case
//!
//! `issued -> valid -> consumed`: a refresh token is exchanged at most
//! once. The subject is taken from the presented access token, which may
//! already be expired; the refresh token itself is not bound to a user.

use std::sync::Arc;

use crate::application::config::JwtConfig;
use crate::application::login::{TokenPair, issue_token_pair};
use crate::domain::repository::RefreshTokenRepository;
use crate::domain::services::{JwtTokenService, TokenParse};
use crate::error::{JwtError, JwtResult};

/// Input DTO for the exchange
#[derive(Debug, Clone)]
pub struct RefreshInput {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Refresh Token Exchange Use Case
pub struct RefreshTokenUseCase<R>
where
    R: RefreshTokenRepository,
{
    refresh_repo: Arc<R>,
    tokens: Arc<JwtTokenService>,
    config: Arc<JwtConfig>,
}

impl<R> RefreshTokenUseCase<R>
where
    R: RefreshTokenRepository,
{
    pub fn new(refresh_repo: Arc<R>, tokens: Arc<JwtTokenService>, config: Arc<JwtConfig>) -> Self {
        Self {
            refresh_repo,
            tokens,
            config,
        }
    }

    pub async fn execute(&self, input: RefreshInput) -> JwtResult<TokenPair> {
        let user = match self.tokens.parse_token(&input.access_token) {
            TokenParse::Valid(claims) => claims.user,
            TokenParse::Expired { claims, .. } => {
                tracing::info!(
                    user = ?claims.user,
                    "Refresh requested with an expired access token"
                );
                claims.user
            }
            TokenParse::Invalid(reason) => return Err(JwtError::InvalidAccessToken(reason)),
        };

        let user = user.ok_or(JwtError::MissingSubject)?;
        let refresh_token = input
            .refresh_token
            .ok_or(JwtError::MissingCredentials)?;

        if !self.refresh_repo.consume(&refresh_token).await? {
            tracing::warn!(user = %user, "Refresh token reuse or unknown token");
            return Err(JwtError::UnknownRefreshToken);
        }

        let pair = issue_token_pair(
            self.refresh_repo.as_ref(),
            &self.tokens,
            &self.config,
            &user,
        )
        .await?;

        tracing::info!(user = %user, "Refresh token exchanged");

        Ok(pair)
    }
}
