//! # API Errors
//!
//! Error types for the HTTP API. Client errors carry their message to the
//! caller; storage failures are logged server-side and surfaced as a generic
//! 500 so internal detail never reaches the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::storage::StoreError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required form field is missing or empty
    #[error("All fields are required")]
    MissingFields,

    /// Requested snippet id has no matching row
    #[error("Snippet not found")]
    SnippetNotFound,

    /// Storage failure; detail is logged, not echoed
    #[error("Internal server error")]
    Storage(#[source] StoreError),

    /// Task or runtime failure; detail is logged, not echoed
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::BAD_REQUEST,
            ApiError::SnippetNotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::SnippetNotFound => ApiError::SnippetNotFound,
            other => ApiError::Storage(other),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Storage(detail) => {
                tracing::error!(error = %detail, "storage failure");
            }
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal failure");
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::SnippetNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("test".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::SnippetNotFound);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Snippet not found");
    }

    #[test]
    fn test_storage_failure_message_is_generic() {
        let sqlite_err = rusqlite::Error::InvalidQuery;
        let err = ApiError::from(StoreError::Sqlite(sqlite_err));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
