//! JWT Lesson Error Types
//!
//! Every credential or token failure maps to 401 with an empty body so
//! the caller learns nothing about which check failed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// JWT-specific result type alias
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT lesson error variants
#[derive(Debug, Error)]
pub enum JwtError {
    /// Request body or Authorization header missing
    #[error("Missing credentials")]
    MissingCredentials,

    /// User name or password does not match
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Access token could not be verified
    #[error("Invalid access token: {0}")]
    InvalidAccessToken(String),

    /// Access token carries no `user` claim
    #[error("Access token has no subject")]
    MissingSubject,

    /// Refresh token unknown, already used, or never issued
    #[error("Refresh token is not valid")]
    UnknownRefreshToken,

    /// Token could not be signed
    #[error("Token encoding failed: {0}")]
    Encoding(#[from] jsonwebtoken::errors::Error),

    /// Configured signing key is empty
    #[error("JWT signing key must not be empty")]
    EmptySigningKey,
}

impl JwtError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            JwtError::MissingCredentials
            | JwtError::InvalidCredentials
            | JwtError::InvalidAccessToken(_)
            | JwtError::MissingSubject
            | JwtError::UnknownRefreshToken => StatusCode::UNAUTHORIZED,
            JwtError::Encoding(_) | JwtError::EmptySigningKey => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::MissingCredentials
            | JwtError::InvalidCredentials
            | JwtError::InvalidAccessToken(_)
            | JwtError::MissingSubject
            | JwtError::UnknownRefreshToken => ErrorKind::Unauthorized,
            JwtError::Encoding(_) | JwtError::EmptySigningKey => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            JwtError::Encoding(e) => {
                tracing::error!(error = %e, "JWT encoding error");
            }
            JwtError::EmptySigningKey => {
                tracing::error!("JWT signing key is empty");
            }
            JwtError::UnknownRefreshToken => {
                tracing::warn!("Refresh token rejected (unknown or reused)");
            }
            JwtError::InvalidCredentials => {
                tracing::warn!("JWT lesson login rejected");
            }
            _ => {
                tracing::debug!(error = %self, "JWT lesson error");
            }
        }
    }
}

impl From<JwtError> for AppError {
    fn from(err: JwtError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for JwtError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), ()).into_response()
    }
}
