//! Submit negative feedback on an AI reply

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::{error, info};

use crate::common::pii::scrub_pii;
use crate::domains::chat::models::{FeedbackMark, Message};
use crate::kernel::{FeedbackRecord, ServerDeps};

pub const FEEDBACK_RECORDED_NOTICE: &str = "Your feedback got registered with us";
pub const FEEDBACK_FAILED_NOTICE: &str = "Failed to submit feedback. Please try again.";

/// What happened to a feedback submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FeedbackOutcome {
    /// Blank feedback; nothing was stored
    Ignored,
    Recorded { notice: String },
    Failed { notice: String },
}

impl FeedbackOutcome {
    /// Snackbar text, if the user should see one
    pub fn notice(&self) -> Option<&str> {
        match self {
            FeedbackOutcome::Ignored => None,
            FeedbackOutcome::Recorded { notice } | FeedbackOutcome::Failed { notice } => {
                Some(notice)
            }
        }
    }
}

/// Store feedback about `message` and mark it negative on success.
///
/// `message` is `None` when the client referenced a message that is not in
/// the transcript; that is reported as a failure. Both the feedback text and
/// the quoted message are scrubbed before they are stored.
pub async fn submit_feedback(
    feedback_text: &str,
    message: Option<&mut Message>,
    user_id: Option<&str>,
    deps: &ServerDeps,
) -> FeedbackOutcome {
    if feedback_text.trim().is_empty() {
        return FeedbackOutcome::Ignored;
    }

    match record_feedback(feedback_text, message, user_id, deps).await {
        Ok(()) => FeedbackOutcome::Recorded {
            notice: FEEDBACK_RECORDED_NOTICE.to_string(),
        },
        Err(e) => {
            error!(error = %e, "Error submitting feedback");
            FeedbackOutcome::Failed {
                notice: FEEDBACK_FAILED_NOTICE.to_string(),
            }
        }
    }
}

async fn record_feedback(
    feedback_text: &str,
    message: Option<&mut Message>,
    user_id: Option<&str>,
    deps: &ServerDeps,
) -> Result<()> {
    let message = message.ok_or_else(|| anyhow!("Message not found"))?;

    let record = FeedbackRecord {
        user_id: user_id.filter(|id| !id.is_empty()).map(str::to_string),
        feedback_text: scrub_pii(feedback_text),
        message_content: scrub_pii(&message.text),
    };

    deps.feedback_store
        .insert_feedback(&record)
        .await
        .context("Failed to store feedback")?;

    message.feedback = Some(FeedbackMark::Negative);
    info!(message_id = %message.id, anonymous = record.user_id.is_none(), "Feedback recorded");

    Ok(())
}
