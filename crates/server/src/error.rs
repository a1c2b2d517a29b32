//! Unified error handling for the order API.
//!
//! Provides the [`AppError`] taxonomy and the single conversion point from
//! errors to HTTP responses. The kind-to-status table lives in
//! [`AppError::status`]; the upstream service this replaces collapsed every
//! failure to 500, and that behavior is preserved here deliberately - each
//! row of the table can be changed independently if the API ever starts
//! distinguishing client errors.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::db::RepositoryError;

/// Application-level error type for the order API.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A business rule rejected the request (unknown store, unknown products).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The storage layer failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl AppError {
    /// The HTTP status this error kind maps to.
    ///
    /// Every kind currently maps to 500: validation, not-found, and
    /// persistence failures are indistinguishable to API clients.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::Repository(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Log a structured failure record and convert to the uniform response.
    ///
    /// `tag` names the failing operation, `message` is the short user-facing
    /// text returned in the body. The log record carries the tag, message,
    /// original error, and status, mirroring what the response hides.
    #[must_use]
    pub fn log_and_respond(self, tag: &'static str, message: &'static str) -> Response {
        let status = self.status();
        tracing::error!(
            tag,
            message,
            error = %self,
            status = status.as_u16(),
            "request failed"
        );
        (
            status,
            Json(json!({
                "message": message,
                "status": status.as_u16(),
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_collapse_to_500() {
        let errors = [
            AppError::Validation("store not found".to_owned()),
            AppError::NotFound("order x".to_owned()),
            AppError::Repository(RepositoryError::Unavailable("down".to_owned())),
        ];
        for e in errors {
            assert_eq!(e.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_repository_error_converts() {
        let e: AppError = RepositoryError::DataCorruption("bad record".to_owned()).into();
        assert!(matches!(e, AppError::Repository(_)));
    }
}
