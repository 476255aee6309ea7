//! Error types for the Contract Analyzer API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file uploaded")]
    NoFileUploaded,

    #[error("Document contains no extractable text")]
    EmptyDocument,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Analyzer unavailable")]
    ServiceUnavailable,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NoFileUploaded => {
                (StatusCode::BAD_REQUEST, "No file uploaded".to_string())
            }
            ApiError::EmptyDocument => (
                StatusCode::BAD_REQUEST,
                "Document contains no extractable text".to_string(),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Analyzer unavailable".to_string(),
            ),
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
