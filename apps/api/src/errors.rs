use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is terminal for the request and maps to a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No Gemini API keys are configured")]
    KeysNotConfigured,

    #[error("Gemini reply is not valid JSON: {raw}")]
    InvalidAiResponse { raw: String },

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::KeysNotConfigured => {
                tracing::error!("Rejecting request: GEMINI_API_KEYS is empty");
                "API keys are not configured on the server. The admin needs to set them up."
                    .to_string()
            }
            AppError::InvalidAiResponse { raw } => {
                tracing::error!("Failed to decode JSON from Gemini response: {raw}");
                "The AI returned an invalid response. Please try again.".to_string()
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                format!("A server error occurred: {e}")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                format!("A server error occurred: {msg}")
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": message })),
        )
            .into_response()
    }
}
