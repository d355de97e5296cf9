#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored turn of a course conversation, as read back from `history`.
///
/// Exactly one of `text` or (`file_mime`, `file_id`) is populated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct HistoryRecord {
    pub id: i64,
    pub course_id: String,
    pub is_user: bool,
    pub text: Option<String>,
    pub file_mime: Option<String>,
    pub file_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload of a history row: a text turn or a file reference, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryContent {
    Text(String),
    File { mime: String, uri: String },
}

/// A row to be appended to `history`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub course_id: String,
    pub is_user: bool,
    pub content: HistoryContent,
}

impl NewHistoryEntry {
    pub fn user_text(course_id: &str, text: impl Into<String>) -> Self {
        Self {
            course_id: course_id.to_string(),
            is_user: true,
            content: HistoryContent::Text(text.into()),
        }
    }

    pub fn model_text(course_id: &str, text: impl Into<String>) -> Self {
        Self {
            course_id: course_id.to_string(),
            is_user: false,
            content: HistoryContent::Text(text.into()),
        }
    }

    /// Column values in `(text, file_mime, file_id)` order.
    pub fn columns(&self) -> (Option<&str>, Option<&str>, Option<&str>) {
        match &self.content {
            HistoryContent::Text(text) => (Some(text.as_str()), None, None),
            HistoryContent::File { mime, uri } => (None, Some(mime.as_str()), Some(uri.as_str())),
        }
    }
}
