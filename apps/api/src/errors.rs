use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::chat::service::PromptError;

const PROCESSING_FAILED: &str = "An error occurred during processing";
const MISSING_AUTHORIZATION: &str = "Authorization header is missing";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Processing(#[from] PromptError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "message": msg })),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                json!({ "message": MISSING_AUTHORIZATION }),
            ),
            AppError::Processing(e) => {
                tracing::error!("Prompt processing failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": PROCESSING_FAILED, "error": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
