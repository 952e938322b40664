//! Simulated advisor content types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// The school holder asking.
    User,
    /// The simulated advisor answering.
    Assistant,
}

/// One advisor chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Builds an advisor-authored message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Executive summary produced for the national monitor.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutiveReport {
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Narrative summary of the closure period.
    pub summary: String,
    /// Detected alert lines.
    pub alerts: Vec<String>,
    /// Suggested follow-up action.
    pub recommendation: String,
}
