//! Context assembly — turns stored attachments and history rows into the
//! ordered turn sequence the model sees.
//!
//! Ordering rule:
//! 1. one user turn per attachment, in loader order
//! 2. one turn per history row, in stored (created_at ascending) order
//!
//! Attachments always come first, whatever their age relative to the
//! conversation. Nothing is dropped, merged, or validated.

use crate::llm_client::{Content, Part, Role};
use crate::models::attachment::Attachment;
use crate::models::history::HistoryRecord;

pub fn build_context(attachments: &[Attachment], history: &[HistoryRecord]) -> Vec<Content> {
    let mut contents = Vec::with_capacity(attachments.len() + history.len());

    contents.extend(attachments.iter().map(|a| {
        Content::single(Role::User, Part::file(a.file_mime.clone(), a.file_id.clone()))
    }));

    contents.extend(history.iter().map(history_turn));

    contents
}

fn history_turn(record: &HistoryRecord) -> Content {
    let role = if record.is_user { Role::User } else { Role::Model };
    let part = match &record.text {
        Some(text) => Part::text(text.clone()),
        None => Part::file(
            record.file_mime.clone().unwrap_or_default(),
            record.file_id.clone().unwrap_or_default(),
        ),
    };
    Content::single(role, part)
}
