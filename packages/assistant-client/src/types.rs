//! Request and response types for the assistant `/chat` endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text returned when the backend answers without any usable reply text.
pub const NO_REPLY: &str = "[No reply received]";

/// Body of a `POST /chat` request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: Option<String>,
    pub is_guest: bool,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, user_id: Option<String>, is_guest: bool) -> Self {
        Self {
            message: message.into(),
            user_id,
            is_guest,
        }
    }
}

/// A single block of a structured reply, e.g. `{"type": "text", "text": "..."}`.
///
/// `text` is left untyped so a block with non-string content still parses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Value,
}

impl ContentBlock {
    /// Trimmed content of a `text` block whose text is a string.
    pub fn text(&self) -> Option<&str> {
        match (self.kind.as_str(), &self.text) {
            ("text", Value::String(text)) => Some(text.trim()),
            _ => None,
        }
    }
}

/// Raw response body. `reply` is either a plain string or a list of content
/// blocks, so it is kept untyped until [`ChatResponseRaw::into_text`].
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponseRaw {
    #[serde(default)]
    pub reply: Value,
}

impl ChatResponseRaw {
    /// Collapse the reply into display text.
    ///
    /// String replies are returned as-is. For block lists only `text` blocks
    /// with string content are kept; each is trimmed and they are joined with
    /// newlines. Anything else yields [`NO_REPLY`].
    pub fn into_text(self) -> String {
        match self.reply {
            Value::String(text) => text,
            Value::Array(blocks) => {
                // Entries that are not block objects are skipped
                let blocks: Vec<ContentBlock> = blocks
                    .into_iter()
                    .filter_map(|block| serde_json::from_value(block).ok())
                    .collect();
                let texts: Vec<&str> = blocks.iter().filter_map(ContentBlock::text).collect();

                let joined = texts.join("\n");
                let joined = joined.trim();
                if joined.is_empty() {
                    NO_REPLY.to_string()
                } else {
                    joined.to_string()
                }
            }
            _ => NO_REPLY.to_string(),
        }
    }
}
