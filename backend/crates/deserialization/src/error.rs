//! Deserialization Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Deserialization result type alias
pub type DeserializationResult<T> = Result<T, DeserializationError>;

/// Object stream error variants
#[derive(Debug, Error)]
pub enum DeserializationError {
    /// Stream is truncated, oversized, or has a bad header
    #[error("Malformed object stream: {0}")]
    MalformedStream(String),

    /// Type name is not on the allow-list
    #[error("Unauthorized deserialization attempt: {type_name}")]
    Rejected { type_name: String },

    /// Type name is allowed but no decoder is registered for it
    #[error("{type_name} not found")]
    TypeNotFound { type_name: String },

    /// Body does not decode as the claimed type
    #[error("Invalid body for {type_name}: {reason}")]
    InvalidBody { type_name: String, reason: String },

    /// Object could not be encoded
    #[error("Encoding failed: {0}")]
    Encoding(String),
}

impl DeserializationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeserializationError::MalformedStream(_)
            | DeserializationError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
            DeserializationError::Rejected { .. } => StatusCode::FORBIDDEN,
            DeserializationError::TypeNotFound { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DeserializationError::Encoding(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeserializationError::MalformedStream(_)
            | DeserializationError::InvalidBody { .. } => ErrorKind::BadRequest,
            DeserializationError::Rejected { .. } => ErrorKind::Forbidden,
            DeserializationError::TypeNotFound { .. } => ErrorKind::UnprocessableEntity,
            DeserializationError::Encoding(_) => ErrorKind::InternalServerError,
        }
    }

    pub(crate) fn log(&self) {
        match self {
            DeserializationError::Rejected { type_name } => {
                tracing::warn!(type_name = %type_name, "Rejected deserialization of type outside the allow-list");
            }
            DeserializationError::Encoding(msg) => {
                tracing::error!(message = %msg, "Object encoding error");
            }
            _ => {
                tracing::debug!(error = %self, "Object stream error");
            }
        }
    }
}

impl From<DeserializationError> for AppError {
    fn from(err: DeserializationError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for DeserializationError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
