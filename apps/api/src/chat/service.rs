//! Prompt orchestration:
//!
//! append user turn → load attachments + history → assemble context →
//! invoke model → validate reply → append model turn → return raw reply
//!
//! Any failure aborts the sequence. Writes that already happened stay; a
//! failed request can leave a user turn with no model answer after it.

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::chat::assembler::build_context;
use crate::chat::guard::{self, ReplyError};
use crate::chat::store::StoreError;
use crate::llm_client::LlmError;
use crate::models::history::NewHistoryEntry;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Model(#[from] LlmError),

    #[error(transparent)]
    Reply(#[from] ReplyError),
}

/// Runs one prompt through the model and returns the model's raw reply.
#[instrument(skip_all, fields(course_id = %course_id))]
pub async fn process_prompt(
    state: &AppState,
    course_id: &str,
    prompt: &str,
) -> Result<String, PromptError> {
    let _course_guard = if state.config.serialize_course_turns {
        Some(state.course_locks.acquire(course_id).await)
    } else {
        None
    };

    state
        .history
        .append(&NewHistoryEntry::user_text(course_id, prompt))
        .await?;
    debug!("User turn appended");

    let attachments = state.attachments.list_for_course(course_id).await?;
    let history = state.history.list(course_id).await?;
    let context = build_context(&attachments, &history);
    debug!(
        "Context assembled: {} attachment turns, {} history turns",
        attachments.len(),
        history.len()
    );

    // The prompt already closes `context`; resending it is configurable.
    let trigger = state.config.duplicate_prompt.then_some(prompt);
    let raw = state.model.invoke(&context, trigger).await?;

    let reply = guard::validate(&raw)?;
    let stored = guard::persisted_text(&raw, &reply);
    state
        .history
        .append(&NewHistoryEntry::model_text(course_id, stored))
        .await?;

    info!("Prompt answered with reply type '{}'", reply.kind.as_str());
    Ok(raw)
}
