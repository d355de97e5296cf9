use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A document bound to a course. Read-only from this service's side.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attachment {
    pub course_id: String,
    pub file_id: String,
    pub file_mime: String,
}
