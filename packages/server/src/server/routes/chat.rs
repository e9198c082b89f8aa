use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::formatting::render_message_markdown;
use crate::domains::chat::{
    quick_reply, random_loading_message, send_message, ChatSession, Message, QuickReplyOption,
};
use crate::kernel::ServerDeps;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::BearerToken;

#[derive(Debug, Deserialize)]
pub struct ChatPayload {
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub is_guest: bool,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub user_message: Message,
    pub reply: Message,
    /// The reply after bullet formatting and Markdown rendering
    pub reply_html: String,
    pub fallback: bool,
}

#[derive(Debug, Deserialize)]
pub struct QuickReplyPayload {
    pub option: QuickReplyOption,
}

#[derive(Debug, Serialize)]
pub struct LoadingMessageResponse {
    pub message: &'static str,
}

pub async fn chat_handler(
    Extension(state): Extension<AppState>,
    token: Option<Extension<BearerToken>>,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatResponse>, ApiError> {
    let session = if payload.is_guest {
        ChatSession::guest()
    } else {
        ChatSession {
            user_id: resolve_user_id(payload.user_id, token.as_deref(), &state.deps).await,
            is_guest: false,
        }
    };

    let exchange = send_message(&payload.message, &session, &state.deps)
        .await
        .ok_or_else(|| ApiError::bad_request("Message must not be empty"))?;

    let reply_html = render_message_markdown(&exchange.reply.text);

    Ok(Json(ChatResponse {
        user_message: exchange.user_message,
        reply: exchange.reply,
        reply_html,
        fallback: exchange.fallback,
    }))
}

pub async fn quick_reply_handler(Json(payload): Json<QuickReplyPayload>) -> Json<ChatResponse> {
    let (user_message, reply) = quick_reply(payload.option).into_messages();
    let reply_html = render_message_markdown(&reply.text);

    Json(ChatResponse {
        user_message,
        reply,
        reply_html,
        fallback: false,
    })
}

pub async fn loading_message_handler() -> Json<LoadingMessageResponse> {
    Json(LoadingMessageResponse {
        message: random_loading_message(),
    })
}

/// The `user_id` the client sent, else the user behind its access token.
///
/// A token the provider rejects is logged and treated as no user.
pub(crate) async fn resolve_user_id(
    explicit: Option<String>,
    token: Option<&BearerToken>,
    deps: &ServerDeps,
) -> Option<String> {
    if let Some(user_id) = explicit.filter(|id| !id.trim().is_empty()) {
        return Some(user_id);
    }

    let token = token?;
    match deps.identity.current_user(&token.0).await {
        Ok(user) => Some(user.id),
        Err(e) => {
            warn!(error = %e, "Could not get authenticated user");
            None
        }
    }
}
