//! Chat domain actions
//!
//! Called from the HTTP handlers. Collaborator failures are caught here,
//! logged, and turned into user-facing text; nothing propagates as an error.

mod loading;
mod quick_reply;
mod send_message;
mod submit_feedback;

pub use loading::{random_loading_message, LOADING_MESSAGES};
pub use quick_reply::{quick_reply, QuickReply, QuickReplyOption};
pub use send_message::{send_message, ChatExchange, FAILURE_REPLY, GUEST_FALLBACK_REPLY};
pub use submit_feedback::{
    submit_feedback, FeedbackOutcome, FEEDBACK_FAILED_NOTICE, FEEDBACK_RECORDED_NOTICE,
};
