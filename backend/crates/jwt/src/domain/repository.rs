//! Repository Traits

use crate::error::JwtResult;

/// Set of refresh tokens that may still be exchanged
#[trait_variant::make(RefreshTokenRepository: Send)]
pub trait LocalRefreshTokenRepository {
    /// Record a freshly issued refresh token
    async fn store(&self, token: &str) -> JwtResult<()>;

    /// Remove the token if it is a member (atomic check-and-remove)
    ///
    /// Returns `true` only for the single caller that removed it.
    async fn consume(&self, token: &str) -> JwtResult<bool>;
}
