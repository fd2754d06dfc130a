// Copyright (c) Anuncios Team
// SPDX-License-Identifier: Apache-2.0

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] so every failure renders the same
/// `{"error": ...}` JSON body the clients expect.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No identity resolved for the request.
    #[error("Authentication required")]
    Unauthorized,

    /// A required field is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The requested entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The multipart payload could not be read.
    #[error("Invalid multipart payload: {0}")]
    Multipart(#[from] MultipartError),

    /// A database error from diesel.
    #[error("Database error: {0}")]
    Database(#[from] diesel::result::Error),

    /// Any other internal failure.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Convenience alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<crate::db::DbPoolError> for ApiError {
    fn from(e: crate::db::DbPoolError) -> Self {
        ApiError::Internal(anyhow::anyhow!("Failed to get database connection: {}", e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Validation(_) | ApiError::Multipart(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            // Row lookups surface diesel's NotFound when the handler did not
            // translate it itself.
            ApiError::Database(diesel::result::Error::NotFound) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ApiError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
