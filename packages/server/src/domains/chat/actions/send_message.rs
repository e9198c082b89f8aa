//! Send a chat message to the assistant

use anyhow::{anyhow, Result};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::common::pii::scrub_pii_with_report;
use crate::domains::auth::guest_request_id;
use crate::domains::chat::models::{ChatSession, Message};
use crate::kernel::ServerDeps;

/// Shown to signed-in users when the assistant cannot be reached
pub const FAILURE_REPLY: &str = "⚠️ Sorry, something went wrong. Please try again later.";

/// Shown to guests instead of an error when the assistant cannot be reached
pub const GUEST_FALLBACK_REPLY: &str = "I'm having trouble connecting to the server. As a guest user, you might experience occasional limitations. Please try again or consider creating an account for a more reliable experience.";

/// The user's (scrubbed) message and the reply to show under it
#[derive(Debug, Clone, Serialize)]
pub struct ChatExchange {
    pub user_message: Message,
    pub reply: Message,
    /// True when `reply` is a failure or fallback text rather than an assistant answer
    pub fallback: bool,
}

/// Scrub `input`, send it to the assistant, and build the exchange to display.
///
/// Blank input returns `None` and sends nothing. Assistant failures never
/// surface as errors: guests get [`GUEST_FALLBACK_REPLY`], signed-in users
/// get [`FAILURE_REPLY`].
pub async fn send_message(
    input: &str,
    session: &ChatSession,
    deps: &ServerDeps,
) -> Option<ChatExchange> {
    if input.trim().is_empty() {
        return None;
    }

    let scrubbed = scrub_pii_with_report(input);
    if scrubbed.pii_detected {
        let categories: Vec<&str> = scrubbed
            .findings
            .categories()
            .iter()
            .map(|c| c.as_str())
            .collect();
        info!(
            redactions = scrubbed.findings.count(),
            categories = ?categories,
            "Redacted PII from chat input"
        );
    }

    let user_message = Message::user(scrubbed.clean_text);

    let (reply, fallback) = match request_reply(&user_message.text, session, deps).await {
        Ok(text) => {
            debug!(reply_len = text.len(), "Assistant replied");
            (Message::ai(text), false)
        }
        Err(e) => {
            error!(error = %e, is_guest = session.is_guest, "Error fetching AI response");
            let text = if session.is_guest {
                GUEST_FALLBACK_REPLY
            } else {
                FAILURE_REPLY
            };
            (Message::ai(text), true)
        }
    };

    Some(ChatExchange {
        user_message,
        reply,
        fallback,
    })
}

async fn request_reply(message: &str, session: &ChatSession, deps: &ServerDeps) -> Result<String> {
    if session.is_guest {
        // Fresh throwaway id per request; guests are never stored under a stable id
        let temp_id = guest_request_id();
        return deps.assistant.chat(message, Some(&temp_id), true).await;
    }

    let user_id = session
        .user_id
        .as_deref()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| anyhow!("User is not authenticated."))?;

    deps.assistant.chat(message, Some(user_id), false).await
}
