//! Response guard — validates the model's raw reply against the reply schema
//! and decides what gets written back to history.
//!
//! The caller always receives the raw reply. Only quiz-setup replies are
//! swapped for a fixed `ignore` substitute before being persisted, so a later
//! context rebuild never replays the quiz prompt as conversation.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::llm_client::prompts::QUIZ_REDIRECT_TEXT;

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("model returned invalid output: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyKind {
    Text,
    QuizSetup,
    Ignore,
    /// A `type` outside the documented set. Accepted and persisted verbatim.
    Other(String),
}

impl From<String> for ReplyKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "text" => ReplyKind::Text,
            "quiz_setup" => ReplyKind::QuizSetup,
            "ignore" => ReplyKind::Ignore,
            _ => ReplyKind::Other(raw),
        }
    }
}

impl ReplyKind {
    pub fn as_str(&self) -> &str {
        match self {
            ReplyKind::Text => "text",
            ReplyKind::QuizSetup => "quiz_setup",
            ReplyKind::Ignore => "ignore",
            ReplyKind::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawReply {
    #[serde(rename = "type")]
    kind: String,
    text_data: String,
    quiz_data: Vec<Value>,
}

/// A model reply that passed schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelReply {
    pub kind: ReplyKind,
    pub text_data: String,
    pub quiz_data: Vec<Value>,
}

#[derive(Serialize)]
struct StoredReply<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text_data: &'a str,
    quiz_data: [Value; 0],
}

/// Parses raw model output. All of `type`, `text_data` and `quiz_data` are required.
pub fn validate(raw: &str) -> Result<ModelReply, ReplyError> {
    let parsed: RawReply = serde_json::from_str(raw)?;
    let kind = ReplyKind::from(parsed.kind);
    if let ReplyKind::Other(other) = &kind {
        warn!("Model replied with undocumented type '{other}'; persisting verbatim");
    }
    Ok(ModelReply {
        kind,
        text_data: parsed.text_data,
        quiz_data: parsed.quiz_data,
    })
}

/// Text to append to history for a validated reply.
pub fn persisted_text<'a>(raw: &'a str, reply: &ModelReply) -> Cow<'a, str> {
    match reply.kind {
        ReplyKind::QuizSetup => Cow::Owned(quiz_redirect_substitute()),
        _ => Cow::Borrowed(raw),
    }
}

fn quiz_redirect_substitute() -> String {
    let stored = StoredReply {
        kind: ReplyKind::Ignore.as_str(),
        text_data: QUIZ_REDIRECT_TEXT,
        quiz_data: [],
    };
    // Serializing a struct of strings and an empty array cannot fail
    serde_json::to_string(&stored).unwrap_or_default()
}
