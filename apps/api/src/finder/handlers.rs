//! Axum route handler for the game finder.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::finder::models::FilterPayload;
use crate::finder::prompts::render_find_games_prompt;
use crate::llm_client::strip_json_fences;
use crate::state::AppState;

/// POST /find_games
///
/// Picks the next Gemini key, asks for game suggestions matching the filters
/// and returns the model's JSON reply unvalidated.
///
/// The body is extracted as a `Result` so an empty key pool is reported
/// before the body is looked at, and so body errors share the 500 payload.
pub async fn handle_find_games(
    State(state): State<AppState>,
    payload: Result<Json<FilterPayload>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let selected = state.keys.next_key().ok_or(AppError::KeysNotConfigured)?;
    info!("Using API key index {}", selected.index);

    let Json(filters) = payload.map_err(|e| AppError::Internal(e.body_text()))?;

    let prompt = render_find_games_prompt(&filters);
    let reply = state.generator.generate(&prompt, &selected.key).await?;

    let cleaned = strip_json_fences(&reply);
    let suggestions: Value = serde_json::from_str(&cleaned)
        .map_err(|_| AppError::InvalidAiResponse { raw: cleaned })?;

    Ok(Json(suggestions))
}
