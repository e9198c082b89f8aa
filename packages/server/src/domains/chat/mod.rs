//! Chat domain - sending messages to the assistant and collecting feedback.
//!
//! Every piece of user-authored text is scrubbed of PII before it is echoed
//! back, sent to the assistant, or persisted.

pub mod actions;
pub mod models;

pub use actions::{
    quick_reply, random_loading_message, send_message, submit_feedback, ChatExchange,
    FeedbackOutcome, QuickReply, QuickReplyOption,
};
pub use models::*;
