//! Error types for the ambient layers.
//!
//! The projection engine itself is total and has no error type.  Only
//! configuration loading and the HTTP surface can fail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("projection task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({"error": self.to_string()}));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
