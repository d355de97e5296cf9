use std::sync::Arc;

use crate::chat::locks::CourseLocks;
use crate::chat::store::{AttachmentLoader, HistoryStore};
use crate::config::Config;
use crate::llm_client::ModelInvoker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Append-only course conversation log. Default: `PgHistoryStore`.
    pub history: Arc<dyn HistoryStore>,
    /// Course documents. Default: `PgAttachmentLoader`.
    pub attachments: Arc<dyn AttachmentLoader>,
    /// Generative model boundary. Default: `GeminiClient`.
    pub model: Arc<dyn ModelInvoker>,
    /// Only consulted when `config.serialize_course_turns` is set.
    pub course_locks: Arc<CourseLocks>,
}
