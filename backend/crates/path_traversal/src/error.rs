//! Path Traversal Lesson Error Types
//!
//! Lesson outcomes (rejected paths, failed writes) are attack results, not
//! errors. These variants cover requests that cannot be processed at all.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Path traversal result type alias
pub type PathTraversalResult<T> = Result<T, PathTraversalError>;

/// Path traversal lesson error variants
#[derive(Debug, Error)]
pub enum PathTraversalError {
    /// No current lesson user on the request
    #[error("Missing current user")]
    MissingUser,

    /// Multipart body could not be read
    #[error("Malformed multipart body: {0}")]
    Multipart(String),

    /// Filesystem error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Path escaped its base directory
    #[error(transparent)]
    PathGuard(#[from] platform::path_guard::PathGuardError),
}

impl PathTraversalError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PathTraversalError::MissingUser => StatusCode::UNAUTHORIZED,
            PathTraversalError::Multipart(_) => StatusCode::BAD_REQUEST,
            PathTraversalError::PathGuard(_) => StatusCode::FORBIDDEN,
            PathTraversalError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathTraversalError::MissingUser => ErrorKind::Unauthorized,
            PathTraversalError::Multipart(_) => ErrorKind::BadRequest,
            PathTraversalError::PathGuard(_) => ErrorKind::Forbidden,
            PathTraversalError::Io(_) => ErrorKind::InternalServerError,
        }
    }

    fn log(&self) {
        match self {
            PathTraversalError::Io(e) => {
                tracing::error!(error = %e, "Path traversal lesson I/O error");
            }
            PathTraversalError::PathGuard(e) => {
                tracing::warn!(error = %e, "Path containment rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Path traversal lesson error");
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }
}

impl From<PathTraversalError> for AppError {
    fn from(err: PathTraversalError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for PathTraversalError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            PathTraversalError::MissingUser => (self.status_code(), ()).into_response(),
            _ => self.to_app_error().into_response(),
        }
    }
}
