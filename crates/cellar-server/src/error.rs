use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cellar_core::{ApiResponse, Error, ValidationErrors};

/// HTTP-facing error taxonomy. Validation failures answer 400 with
/// field-level detail, unknown ids 404, store failures 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation Error")]
    Validation(ValidationErrors),

    #[error("Beer not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

// A body axum cannot deserialize is a validation failure like any
// other, answered with the same 400 envelope.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationErrors::single("body", rejection.body_text()))
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(errors) => ApiError::Validation(errors),
            Error::InvalidId { value, reason } => ApiError::Validation(ValidationErrors::single(
                "id",
                format!("invalid id '{}': {}", value, reason),
            )),
            Error::NotFound { .. } => ApiError::NotFound,
            Error::Storage { message } => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let body = serde_json::json!({
                    "success": false,
                    "error": "Validation Error",
                    "message": errors.to_string(),
                    "details": errors.errors(),
                });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::<()>::failure("Beer not found")),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::failure(message)),
            )
                .into_response(),
        }
    }
}
