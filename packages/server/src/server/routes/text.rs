//! Local previews of the text pipelines

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::common::formatting::{format_bullets_for_markdown, render_markdown};
use crate::common::pii::scrub_pii;

#[derive(Debug, Deserialize)]
pub struct TextPayload {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ScrubResponse {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub markdown: String,
    pub html: String,
}

pub async fn scrub_handler(Json(payload): Json<TextPayload>) -> Json<ScrubResponse> {
    Json(ScrubResponse {
        text: scrub_pii(&payload.text),
    })
}

pub async fn format_handler(Json(payload): Json<TextPayload>) -> Json<FormatResponse> {
    let markdown = format_bullets_for_markdown(&payload.text);
    let html = render_markdown(&markdown);
    Json(FormatResponse { markdown, html })
}
