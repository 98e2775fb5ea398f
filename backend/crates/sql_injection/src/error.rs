//! SQL Injection Lesson Error Types
//!
//! Query errors are shown to the student as part of a failed attack
//! result. Only an unreachable database becomes an HTTP error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// SQL injection result type alias
pub type SqlInjectionResult<T> = Result<T, SqlInjectionError>;

/// SQL injection lesson error variants
#[derive(Debug, Error)]
pub enum SqlInjectionError {
    /// Database error
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}

impl SqlInjectionError {
    /// True when the database could not be reached at all
    pub fn is_unavailable(&self) -> bool {
        match self {
            SqlInjectionError::Database(e) => matches!(
                e,
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
            ),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        if self.is_unavailable() {
            ErrorKind::ServiceUnavailable
        } else {
            ErrorKind::InternalServerError
        }
    }

    pub(crate) fn log(&self) {
        if self.is_unavailable() {
            tracing::error!(error = %self, "Lesson database unavailable");
        } else {
            tracing::warn!(error = %self, "Lesson query failed");
        }
    }
}

impl From<SqlInjectionError> for AppError {
    fn from(err: SqlInjectionError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}

impl IntoResponse for SqlInjectionError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
