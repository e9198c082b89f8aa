//! Canned answers for the quick-reply chips under the chat input

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domains::chat::models::Message;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum QuickReplyOption {
    Jobs,
    Mentorship,
    Community,
}

impl std::str::FromStr for QuickReplyOption {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Jobs" => Ok(QuickReplyOption::Jobs),
            "Mentorship" => Ok(QuickReplyOption::Mentorship),
            "Community" => Ok(QuickReplyOption::Community),
            _ => Err(anyhow::anyhow!("Invalid quick reply option: {}", s)),
        }
    }
}

/// The prompt posted on the user's behalf and the canned reply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickReply {
    pub prompt: &'static str,
    pub reply: &'static str,
}

impl QuickReply {
    /// User bubble followed by the AI bubble
    pub fn into_messages(self) -> (Message, Message) {
        (Message::user(self.prompt), Message::ai(self.reply))
    }
}

const JOBS_REPLY: &str = "I see you're interested in exploring job opportunities. Can you tell me more about what you're looking for?\n\n\
• Are you actively or passively looking for a job?\n\n\
• Would you like me to search for relevant openings?\n\n\
• Or would you prefer help with learning new skills that can improve your job prospects?\n\n\
The more details you provide about your experience, skills, and career goals, the better I can assist you.";

const MENTORSHIP_REPLY: &str = "I'd be happy to help with mentorship resources. Please let me know what you're interested in:\n\n\
• Online courses and learning paths in specific skills or fields\n\n\
• Upcoming workshops or training sessions relevant to your interests\n\n\
• Connection with a personal mentor for one-on-one guidance\n\n\
• Industry-specific learning resources and certification programs\n\n\
What field or skill are you looking to develop, and which type of mentorship support would be most helpful for you right now?";

const COMMUNITY_REPLY: &str = "Exploring communities is a great way to grow personally and professionally. To help you find the right communities:\n\n\
• What topics or areas are you most interested in?\n\n\
• Are you looking for in-person meetups, online forums, or professional networks?\n\n\
• Would you prefer communities focused on learning, networking, or social support?\n\n\
Let me know your interests, and I can suggest some communities that might be a good fit for you.";

/// Quick replies never call the assistant.
pub fn quick_reply(option: QuickReplyOption) -> QuickReply {
    match option {
        QuickReplyOption::Jobs => QuickReply {
            prompt: "Find me jobs",
            reply: JOBS_REPLY,
        },
        QuickReplyOption::Mentorship => QuickReply {
            prompt: "Connect with a mentor",
            reply: MENTORSHIP_REPLY,
        },
        QuickReplyOption::Community => QuickReply {
            prompt: "Explore communities",
            reply: COMMUNITY_REPLY,
        },
    }
}
