//! Checkout Use Case
//!
//! Solved when the basket is checked out with a valid token for Tom.

use std::sync::Arc;

use kernel::AttackResult;

use crate::domain::services::{JwtTokenService, TokenParse};

/// Assignment name reported in attack results
pub const ASSIGNMENT: &str = "JWTRefreshEndpoint";

/// The user whose basket has to be checked out
pub const TARGET_USER: &str = "Tom";

/// Checkout Use Case
pub struct CheckoutUseCase {
    tokens: Arc<JwtTokenService>,
}

impl CheckoutUseCase {
    pub fn new(tokens: Arc<JwtTokenService>) -> Self {
        Self { tokens }
    }

    pub fn execute(&self, access_token: &str) -> AttackResult {
        match self.tokens.parse_token(access_token) {
            TokenParse::Valid(claims) => match claims.subject() {
                Some(TARGET_USER) => {
                    tracing::info!("Checkout as Tom succeeded");
                    AttackResult::success(ASSIGNMENT).build()
                }
                other => AttackResult::failed(ASSIGNMENT)
                    .feedback("jwt-refresh-not-tom")
                    .feedback_args([other.unwrap_or_default()])
                    .build(),
            },
            TokenParse::Expired { message, .. } => {
                AttackResult::failed(ASSIGNMENT).output(message).build()
            }
            TokenParse::Invalid(reason) => {
                tracing::debug!(reason = %reason, "Checkout with invalid token");
                AttackResult::failed(ASSIGNMENT)
                    .feedback("jwt-invalid-token")
                    .build()
            }
        }
    }
}
