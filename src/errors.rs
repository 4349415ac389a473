use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::validation::FieldError;

#[derive(Debug)]
pub enum ApiError {
    InvalidCredentials,
    EmailAlreadyRegistered,
    Unauthorized,
    Forbidden,
    NotFound,
    AlreadyApplied,
    JobExpired,
    Validation(Vec<FieldError>),
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// Validation failures are never fatal: they render as a 400 with one
/// `{field, message}` entry per violated rule so the form layer can annotate
/// each input.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            ApiError::EmailAlreadyRegistered => (StatusCode::CONFLICT, "Email already registered"),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
            ApiError::AlreadyApplied => (StatusCode::CONFLICT, "Already applied to this job"),
            ApiError::JobExpired => (StatusCode::GONE, "Job posting has expired"),
            ApiError::Validation(fields) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({
                      "error": "Validation failed",
                      "fields": fields
                    })),
                )
                    .into_response();
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
