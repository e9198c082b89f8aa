use serde::{Deserialize, Serialize};

/// Who is chatting: a signed-in user or a guest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSession {
    /// Provider user id; always `None` for guests
    pub user_id: Option<String>,
    pub is_guest: bool,
}

impl ChatSession {
    pub fn guest() -> Self {
        Self {
            user_id: None,
            is_guest: true,
        }
    }

    pub fn member(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_guest: false,
        }
    }
}
