use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use super::chat::resolve_user_id;
use crate::domains::chat::{submit_feedback, FeedbackOutcome, Message};
use crate::server::app::AppState;
use crate::server::middleware::BearerToken;

#[derive(Debug, Deserialize)]
pub struct FeedbackPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    pub feedback_text: String,
    /// Text of the AI message the feedback is about; absent when the client
    /// could not find it in its transcript
    #[serde(default)]
    pub message_content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    #[serde(flatten)]
    pub outcome: FeedbackOutcome,
    /// The message as marked, when feedback was recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
}

/// Outcomes are reported in the body; the snackbar shows `notice` either way.
pub async fn feedback_handler(
    Extension(state): Extension<AppState>,
    token: Option<Extension<BearerToken>>,
    Json(payload): Json<FeedbackPayload>,
) -> Json<FeedbackResponse> {
    let user_id = resolve_user_id(payload.user_id, token.as_deref(), &state.deps).await;
    let mut message = payload.message_content.map(Message::ai);

    let outcome = submit_feedback(
        &payload.feedback_text,
        message.as_mut(),
        user_id.as_deref(),
        &state.deps,
    )
    .await;

    let message = match outcome {
        FeedbackOutcome::Recorded { .. } => message,
        _ => None,
    };

    Json(FeedbackResponse { outcome, message })
}
