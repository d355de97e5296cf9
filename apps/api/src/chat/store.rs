//! Persistence seams for course chat: the append-only `history` log and the
//! read-only `files` table. Both are traits so the orchestration can run
//! against Postgres in production and in-memory fakes in tests.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use tracing::debug;

use crate::models::attachment::Attachment;
use crate::models::history::{HistoryRecord, NewHistoryEntry};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append and read back the ordered conversation of a course.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn append(&self, entry: &NewHistoryEntry) -> Result<(), StoreError>;

    /// All rows for the course, oldest first.
    async fn list(&self, course_id: &str) -> Result<Vec<HistoryRecord>, StoreError>;
}

/// Documents attached to a course.
#[async_trait]
pub trait AttachmentLoader: Send + Sync {
    async fn list_for_course(&self, course_id: &str) -> Result<Vec<Attachment>, StoreError>;
}

pub struct PgHistoryStore {
    pool: PgPool,
}

impl PgHistoryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryStore for PgHistoryStore {
    async fn append(&self, entry: &NewHistoryEntry) -> Result<(), StoreError> {
        let (text, file_mime, file_id) = entry.columns();

        // Append-only: rows are never updated or deleted
        sqlx::query(
            r#"
            INSERT INTO history (course_id, is_user, text, file_mime, file_id)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&entry.course_id)
        .bind(entry.is_user)
        .bind(text)
        .bind(file_mime)
        .bind(file_id)
        .execute(&self.pool)
        .await?;

        debug!(
            "Appended {} turn to history of course {}",
            if entry.is_user { "user" } else { "model" },
            entry.course_id
        );
        Ok(())
    }

    async fn list(&self, course_id: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        Ok(sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT id, course_id, is_user, text, file_mime, file_id, created_at
            FROM history
            WHERE course_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?)
    }
}

pub struct PgAttachmentLoader {
    pool: PgPool,
}

impl PgAttachmentLoader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttachmentLoader for PgAttachmentLoader {
    async fn list_for_course(&self, course_id: &str) -> Result<Vec<Attachment>, StoreError> {
        Ok(sqlx::query_as::<_, Attachment>(
            "SELECT course_id, file_id, file_mime FROM files WHERE course_id = $1",
        )
        .bind(course_id)
        .fetch_all(&self.pool)
        .await?)
    }
}
