//! Integration tests for the chat, quick-reply and feedback routes.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use disha_core::domains::chat::actions::{
    FAILURE_REPLY, FEEDBACK_FAILED_NOTICE, FEEDBACK_RECORDED_NOTICE, GUEST_FALLBACK_REPLY,
    LOADING_MESSAGES,
};
use disha_core::kernel::{MockAssistant, MockFeedbackStore, MockIdentityProvider, TestDependencies};
use serde_json::json;

fn harness_with_member() -> TestHarness {
    TestHarness::with_deps(TestDependencies::new().with_identity(
        MockIdentityProvider::new().with_account("u1", "jane@example.com", "secret123", Some("Jane")),
    ))
}

// ============================================================================
// /api/chat
// ============================================================================

#[tokio::test]
async fn guest_message_is_scrubbed_and_reply_rendered() {
    let harness = TestHarness::with_deps(
        TestDependencies::new()
            .with_assistant(MockAssistant::new().with_reply("Options: • Jobs • Mentorship")),
    );

    let response = harness
        .post_json(
            "/api/chat",
            json!({"message": "I'm jane@example.com, call 555-123-4567", "is_guest": true}),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["user_message"]["text"],
        "I'm [EMAIL REDACTED], call [PHONE REDACTED]"
    );
    assert_eq!(response.body["user_message"]["sender"], "user");
    assert_eq!(response.body["reply"]["text"], "Options: • Jobs • Mentorship");
    assert_eq!(response.body["fallback"], false);

    let html = response.body["reply_html"].as_str().unwrap();
    assert!(html.contains("<p class=\"message-paragraph\">• Jobs</p>"));
    assert!(html.contains("<p class=\"message-paragraph\">• Mentorship</p>"));

    let calls = harness.deps.assistant.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].message, "I'm [EMAIL REDACTED], call [PHONE REDACTED]");
    assert!(calls[0].is_guest);
    assert!(calls[0].user_id.as_deref().unwrap().starts_with("temp_"));
}

#[tokio::test]
async fn member_message_uses_body_user_id() {
    let harness = TestHarness::new();

    let response = harness
        .post_json("/api/chat", json!({"message": "hello", "user_id": "u9"}), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let calls = harness.deps.assistant.calls();
    assert_eq!(calls[0].user_id.as_deref(), Some("u9"));
    assert!(!calls[0].is_guest);
}

#[tokio::test]
async fn member_user_id_falls_back_to_access_token() {
    let harness = harness_with_member();

    let response = harness
        .post_json("/api/chat", json!({"message": "hello"}), Some("token-u1"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(harness.deps.assistant.calls()[0].user_id.as_deref(), Some("u1"));
}

#[tokio::test]
async fn member_without_identity_gets_failure_reply() {
    let harness = harness_with_member();

    let response = harness
        .post_json("/api/chat", json!({"message": "hello"}), Some("stale-token"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["reply"]["text"], FAILURE_REPLY);
    assert_eq!(response.body["fallback"], true);
    assert!(harness.deps.assistant.calls().is_empty());
}

#[tokio::test]
async fn guest_gets_fallback_when_assistant_fails() {
    let harness = TestHarness::with_deps(
        TestDependencies::new().with_assistant(MockAssistant::new().with_failure("502 Bad Gateway")),
    );

    let response = harness
        .post_json("/api/chat", json!({"message": "hello", "is_guest": true}), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["reply"]["text"], GUEST_FALLBACK_REPLY);
    assert_eq!(response.body["fallback"], true);
}

#[tokio::test]
async fn blank_message_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .post_json("/api/chat", json!({"message": "   ", "is_guest": true}), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["error"].is_string());
    assert!(harness.deps.assistant.calls().is_empty());
}

// ============================================================================
// Quick replies and loading messages
// ============================================================================

#[tokio::test]
async fn quick_reply_never_calls_assistant() {
    let harness = TestHarness::new();

    let response = harness
        .post_json("/api/chat/quick-reply", json!({"option": "Mentorship"}), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user_message"]["text"], "Connect with a mentor");
    assert_eq!(response.body["reply"]["sender"], "ai");
    let html = response.body["reply_html"].as_str().unwrap();
    assert_eq!(html.matches("<p class=\"message-paragraph\">• ").count(), 4);
    assert!(harness.deps.assistant.calls().is_empty());
}

#[tokio::test]
async fn loading_message_comes_from_fixed_list() {
    let harness = TestHarness::new();

    let response = harness.get("/api/chat/loading-message", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let message = response.body["message"].as_str().unwrap();
    assert!(LOADING_MESSAGES.contains(&message));
}

// ============================================================================
// /api/feedback
// ============================================================================

#[tokio::test]
async fn feedback_is_scrubbed_and_attributed_to_token_user() {
    let harness = harness_with_member();

    let response = harness
        .post_json(
            "/api/feedback",
            json!({
                "feedback_text": "Wrong. I'm @jane_doe on twitter",
                "message_content": "Email support@disha.app"
            }),
            Some("token-u1"),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "recorded");
    assert_eq!(response.body["notice"], FEEDBACK_RECORDED_NOTICE);
    assert_eq!(response.body["message"]["feedback"], "negative");
    assert_eq!(response.body["message"]["text"], "Email support@disha.app");

    let records = harness.deps.feedback_store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id.as_deref(), Some("u1"));
    assert_eq!(records[0].feedback_text, "Wrong. I'm [SOCIAL MEDIA HANDLE REDACTED] on twitter");
    assert_eq!(records[0].message_content, "Email [EMAIL REDACTED]");
}

#[tokio::test]
async fn anonymous_feedback_is_stored_without_user() {
    let harness = TestHarness::new();

    let response = harness
        .post_json(
            "/api/feedback",
            json!({"feedback_text": "not helpful", "message_content": "reply"}),
            None,
        )
        .await;

    assert_eq!(response.body["status"], "recorded");
    assert!(harness.deps.feedback_store.records()[0].user_id.is_none());
}

#[tokio::test]
async fn feedback_without_message_fails() {
    let harness = TestHarness::new();

    let response = harness
        .post_json("/api/feedback", json!({"feedback_text": "not helpful"}), None)
        .await;

    assert_eq!(response.body["status"], "failed");
    assert_eq!(response.body["notice"], FEEDBACK_FAILED_NOTICE);
    assert!(response.body.get("message").is_none());
    assert!(harness.deps.feedback_store.records().is_empty());
}

#[tokio::test]
async fn feedback_store_failure_is_reported() {
    let harness = TestHarness::with_deps(
        TestDependencies::new().with_feedback_store(MockFeedbackStore::failing()),
    );

    let response = harness
        .post_json(
            "/api/feedback",
            json!({"feedback_text": "not helpful", "message_content": "reply"}),
            None,
        )
        .await;

    assert_eq!(response.body["status"], "failed");
    assert!(response.body.get("message").is_none());
}

#[tokio::test]
async fn blank_feedback_is_ignored() {
    let harness = TestHarness::new();

    let response = harness
        .post_json(
            "/api/feedback",
            json!({"feedback_text": "  ", "message_content": "reply"}),
            None,
        )
        .await;

    assert_eq!(response.body, json!({"status": "ignored"}));
}
