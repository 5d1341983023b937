use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire shape is a flat `{"error": "<message>"}` object, the contract
/// the resume forms already consume.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Resume generation failed: {0}")]
    GenerationFailed(anyhow::Error),

    #[error("Resume optimization failed: {0}")]
    OptimizationFailed(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidBody(detail) => {
                tracing::warn!("Rejected request body: {detail}");
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
            }
            AppError::GenerationFailed(e) => {
                tracing::error!("Error generating resume: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate resume".to_string(),
                )
            }
            AppError::OptimizationFailed(e) => {
                tracing::error!("Error optimizing resume: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to optimize resume".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
