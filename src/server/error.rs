//! API error responses.

use crate::error::PolishError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from client (malformed multipart, oversized upload).
    BadRequest(String),
    /// Error from the polish pipeline.
    Polish(PolishError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            // The pipeline draws no line between client and upstream
            // faults (a corrupt PDF and a rate limit both abort the
            // request), so everything maps to one status.
            ApiError::Polish(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "polish_error",
                e.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<PolishError> for ApiError {
    fn from(err: PolishError) -> Self {
        ApiError::Polish(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Polish(e) => write!(f, "Polish error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
