//! In-Memory Refresh Token Store
//!
//! Owned by one lesson service instance and shared by every request
//! through the router state.

use std::sync::Arc;

use dashmap::DashSet;

use crate::domain::repository::RefreshTokenRepository;
use crate::error::JwtResult;

/// Refresh token set backed by a concurrent hash set
#[derive(Debug, Clone, Default)]
pub struct InMemoryRefreshTokenStore {
    tokens: Arc<DashSet<String>>,
}

impl InMemoryRefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }
}

impl RefreshTokenRepository for InMemoryRefreshTokenStore {
    async fn store(&self, token: &str) -> JwtResult<()> {
        self.tokens.insert(token.to_string());
        Ok(())
    }

    async fn consume(&self, token: &str) -> JwtResult<bool> {
        // remove() holds the shard lock across check and delete
        Ok(self.tokens.remove(token).is_some())
    }
}
