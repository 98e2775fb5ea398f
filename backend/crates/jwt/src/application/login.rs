//! Login Use Case

use std::sync::Arc;

use crate::application::config::JwtConfig;
use crate::domain::repository::RefreshTokenRepository;
use crate::domain::services::JwtTokenService;
use crate::error::{JwtError, JwtResult};

/// The only account this lesson lets log in
pub const LOGIN_USER: &str = "Jerry";

/// Input DTO for login
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub user: Option<String>,
    pub password: Option<String>,
}

/// Access token plus single-use refresh token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login Use Case
pub struct LoginUseCase<R>
where
    R: RefreshTokenRepository,
{
    refresh_repo: Arc<R>,
    tokens: Arc<JwtTokenService>,
    config: Arc<JwtConfig>,
}

impl<R> LoginUseCase<R>
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

    pub async fn execute(&self, input: LoginInput) -> JwtResult<TokenPair> {
        let (Some(user), Some(password)) = (input.user, input.password) else {
            return Err(JwtError::InvalidCredentials);
        };

        let password_ok = platform::crypto::constant_time_eq(
            password.as_bytes(),
            self.config.login_password.as_bytes(),
        );
        if !user.eq_ignore_ascii_case(LOGIN_USER) || !password_ok {
            return Err(JwtError::InvalidCredentials);
        }

        let pair = issue_token_pair(
            self.refresh_repo.as_ref(),
            &self.tokens,
            &self.config,
            &user,
        )
        .await?;

        tracing::info!(user = %user, "JWT lesson login succeeded");

        Ok(pair)
    }
}

/// Mint an access token for `user` and record a new refresh token
pub(crate) async fn issue_token_pair<R>(
    refresh_repo: &R,
    tokens: &JwtTokenService,
    config: &JwtConfig,
    user: &str,
) -> JwtResult<TokenPair>
where
    R: RefreshTokenRepository,
{
    let access_token = tokens.create_token(user)?;
    let refresh_token = platform::crypto::random_token(config.refresh_token_bytes);
    refresh_repo.store(&refresh_token).await?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}
