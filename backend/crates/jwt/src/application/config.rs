//! Application Configuration

use std::time::Duration;

use crate::error::{JwtError, JwtResult};

/// Password accepted for Jerry when none is configured
pub const DEFAULT_LOGIN_PASSWORD: &str = "bm5n3SkxCX4kKvHkm";

/// JWT refresh lesson configuration
///
/// The signing key is never empty: `Default` draws a random one and
/// [`JwtConfig::new`] rejects an empty key.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HS512 signing secret
    signing_key: String,
    /// Password Jerry logs in with
    pub login_password: String,
    /// Lifetime of minted access tokens
    pub access_token_ttl: Duration,
    /// Random bytes per refresh token
    pub refresh_token_bytes: usize,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            signing_key: platform::crypto::random_token(48),
            login_password: DEFAULT_LOGIN_PASSWORD.to_string(),
            access_token_ttl: Duration::from_secs(600),
            refresh_token_bytes: 24,
        }
    }
}

impl JwtConfig {
    /// Create config with a configured signing key
    pub fn new(signing_key: impl Into<String>) -> JwtResult<Self> {
        let signing_key = signing_key.into();
        if signing_key.trim().is_empty() {
            return Err(JwtError::EmptySigningKey);
        }

        Ok(Self {
            signing_key,
            ..Default::default()
        })
    }

    /// Create config for development (fixed key, tokens survive restarts)
    pub fn development() -> Self {
        Self {
            signing_key: "webgoat-development-signing-key".to_string(),
            ..Default::default()
        }
    }

    /// Build config from optional deployment settings
    ///
    /// A configured key always wins. Without one, `allow_development` picks
    /// the development key; otherwise the missing key is an error. A
    /// configured password overrides Jerry's default either way.
    pub fn from_settings(
        signing_key: Option<String>,
        login_password: Option<String>,
        allow_development: bool,
    ) -> JwtResult<Self> {
        let mut config = match signing_key {
            Some(key) => Self::new(key)?,
            None if allow_development => Self::development(),
            None => return Err(JwtError::EmptySigningKey),
        };
        if let Some(password) = login_password {
            config.login_password = password;
        }
        Ok(config)
    }

    pub fn signing_key(&self) -> &str {
        &self.signing_key
    }
}
