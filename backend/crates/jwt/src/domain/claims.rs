//! Access Token Claims

use serde::{Deserialize, Serialize};

/// Claims carried by lesson access tokens
///
/// `admin` is a string flag, always minted as `"false"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default)]
    pub admin: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl LessonClaims {
    pub fn new(user: impl Into<String>, iat: i64, exp: i64) -> Self {
        Self {
            user: Some(user.into()),
            admin: "false".to_string(),
            iat,
            exp,
        }
    }

    /// Subject of the token, if present
    pub fn subject(&self) -> Option<&str> {
        self.user.as_deref()
    }
}
