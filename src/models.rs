// src/models.rs

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A citation attached to a bot answer. `score` is a distance metric
/// (lower = more similar), so the similarity shown to the user is
/// `1.0 - score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub title: String,
    pub source: String,
    pub score: f64,
}

impl SourceRef {
    /// Similarity formatted the way the source list displays it.
    pub fn similarity(&self) -> String {
        format!("{:.2}", 1.0 - self.score)
    }
}

/// One entry of the conversation. Immutable once appended; the transcript
/// only ever grows during a session.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    pub sources: Vec<SourceRef>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self::build(content, Sender::User, Vec::new())
    }

    pub fn bot(content: impl Into<String>, sources: Vec<SourceRef>) -> Self {
        Self::build(content, Sender::Bot, sources)
    }

    fn build(content: impl Into<String>, sender: Sender, sources: Vec<SourceRef>) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            sender,
            timestamp: Local::now(),
            sources,
        }
    }
}

/// Connectivity to the backend, probed once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    Error,
}

/// Body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub query: &'a str,
    pub category: &'a str,
}

/// Successful body of `POST /chat`. `sources` may be absent entirely when
/// the backend answers without citations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
    #[serde(default)]
    pub total_sources: u32,
}
