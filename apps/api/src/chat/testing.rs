//! In-memory stand-ins for the store, loader and model seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use crate::chat::locks::CourseLocks;
use crate::chat::store::{AttachmentLoader, HistoryStore, StoreError};
use crate::config::Config;
use crate::llm_client::{Content, LlmError, ModelInvoker};
use crate::models::attachment::Attachment;
use crate::models::history::{HistoryContent, HistoryRecord, NewHistoryEntry};
use crate::state::AppState;

#[derive(Default)]
pub struct MemoryHistory {
    pub rows: Mutex<Vec<HistoryRecord>>,
    pub list_calls: AtomicUsize,
    pub append_calls: AtomicUsize,
    /// 1-based index of the append call that fails, if any.
    pub fail_on_append: Option<usize>,
    pub fail_on_list: bool,
}

impl MemoryHistory {
    pub fn failing_on_append(n: usize) -> Self {
        Self {
            fail_on_append: Some(n),
            ..Self::default()
        }
    }

    pub fn failing_on_list() -> Self {
        Self {
            fail_on_list: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<HistoryRecord> {
        self.rows.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst) + self.append_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn append(&self, entry: &NewHistoryEntry) -> Result<(), StoreError> {
        let n = self.append_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_append == Some(n) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        let (text, file_mime, file_id) = match &entry.content {
            HistoryContent::Text(t) => (Some(t.clone()), None, None),
            HistoryContent::File { mime, uri } => (None, Some(mime.clone()), Some(uri.clone())),
        };
        rows.push(HistoryRecord {
            id,
            course_id: entry.course_id.clone(),
            is_user: entry.is_user,
            text,
            file_mime,
            file_id,
            created_at: Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap() + Duration::seconds(id),
        });
        Ok(())
    }

    async fn list(&self, course_id: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on_list {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.course_id == course_id)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct StaticAttachments {
    pub files: Vec<Attachment>,
    pub fail: bool,
    pub calls: AtomicUsize,
}

impl StaticAttachments {
    pub fn with(files: Vec<Attachment>) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AttachmentLoader for StaticAttachments {
    async fn list_for_course(&self, course_id: &str) -> Result<Vec<Attachment>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(self
            .files
            .iter()
            .filter(|f| f.course_id == course_id)
            .cloned()
            .collect())
    }
}

/// Replies with a fixed text (or fails) and records every call.
pub struct ScriptedModel {
    reply: Option<String>,
    pub calls: Mutex<Vec<(Vec<Content>, Option<String>)>>,
}

impl ScriptedModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelInvoker for ScriptedModel {
    async fn invoke(&self, context: &[Content], trigger: Option<&str>) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((context.to_vec(), trigger.map(str::to_string)));
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model overloaded".to_string(),
        })
    }
}

pub fn attachment(course_id: &str, file_id: &str, mime: &str) -> Attachment {
    Attachment {
        course_id: course_id.to_string(),
        file_id: file_id.to_string(),
        file_mime: mime.to_string(),
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://localhost/unused".to_string(),
        gemini_api_key: "test-key".to_string(),
        gemini_model: "gemini-1.5-flash".to_string(),
        gemini_base_url: "http://localhost:0".to_string(),
        port: 0,
        rust_log: "debug".to_string(),
        duplicate_prompt: true,
        serialize_course_turns: false,
    }
}

pub fn test_state(
    config: Config,
    history: Arc<MemoryHistory>,
    attachments: Arc<StaticAttachments>,
    model: Arc<ScriptedModel>,
) -> AppState {
    AppState {
        config,
        history,
        attachments,
        model,
        course_locks: Arc::new(CourseLocks::default()),
    }
}
