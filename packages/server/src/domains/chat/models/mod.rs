pub mod message;
pub mod session;

pub use message::{FeedbackMark, Message, Sender};
pub use session::ChatSession;
