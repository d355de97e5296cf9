//! Axum route handlers for the Prompt API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::chat::service::process_prompt;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    /// The model's raw reply, unparsed.
    pub message: String,
}

/// POST /prompt
///
/// Body: `{ "prompt": string, "course_id": string | number }`. Fields are read
/// one by one so a mistyped field never hides a present one. A missing or
/// unparsable body is treated as `{}`.
pub async fn handle_prompt(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<PromptResponse>, AppError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);

    let prompt = field_text(&body, "prompt")
        .ok_or_else(|| AppError::Validation("Please input a prompt".to_string()))?;
    let course_id = field_text(&body, "course_id")
        .ok_or_else(|| AppError::Validation("Please input a course ID".to_string()))?;

    let message = process_prompt(&state, &course_id, &prompt).await?;

    Ok(Json(PromptResponse { message }))
}

/// A non-empty string, or a number rendered as text. Anything else is absent.
fn field_text(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
