use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Names handed out to guests, one picked at random per session
pub const GUEST_NAMES: [&str; 5] = [
    "Guest Explorer",
    "Curious Visitor",
    "New Adventurer",
    "Disha Friend",
    "Learning Seeker",
];

/// Temporary identity for chatting without an account.
///
/// Lives only on the client; nothing about it is persisted server side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GuestSession {
    pub id: Uuid,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub is_guest: bool,
}

impl GuestSession {
    pub fn new() -> Self {
        let name = GUEST_NAMES[fastrand::usize(..GUEST_NAMES.len())];
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            timestamp: Utc::now(),
            is_guest: true,
        }
    }
}

impl Default for GuestSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Throwaway `user_id` sent with guest chat requests: `temp_<millis>_<random>`.
///
/// The prefix tells the backend not to store anything under it.
pub fn guest_request_id() -> String {
    let suffix: String = std::iter::repeat_with(|| fastrand::alphanumeric().to_ascii_lowercase())
        .take(13)
        .collect();
    format!("temp_{}_{}", Utc::now().timestamp_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_session_uses_known_name() {
        let session = GuestSession::new();

        assert!(session.is_guest);
        assert!(GUEST_NAMES.contains(&session.name.as_str()));
    }

    #[test]
    fn test_guest_sessions_get_distinct_ids() {
        assert_ne!(GuestSession::new().id, GuestSession::new().id);
    }

    #[test]
    fn test_guest_session_serializes_for_local_storage() {
        let value = serde_json::to_value(GuestSession::new()).unwrap();

        assert_eq!(value["isGuest"], serde_json::json!(true));
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_guest_request_id_shape() {
        let id = guest_request_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();

        assert_eq!(parts[0], "temp");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 13);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
