// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Scrubbing, validation and fallback replies live in the domain actions that use them.
//
// Naming convention: Base* for trait names (e.g., BaseAssistant, BaseFeedbackStore)

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// =============================================================================
// Assistant Trait (Infrastructure - remote chat backend)
// =============================================================================

#[async_trait]
pub trait BaseAssistant: Send + Sync {
    /// Send already-scrubbed text and return the reply as display text
    async fn chat(&self, message: &str, user_id: Option<&str>, is_guest: bool) -> Result<String>;
}

// =============================================================================
// Identity Provider Trait (Infrastructure - accounts and sessions)
// =============================================================================

/// A signed-in user as reported by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: Option<String>,
    /// Display name stored as account metadata at sign-up, if any
    pub display_name: Option<String>,
    pub access_token: String,
}

#[async_trait]
pub trait BaseIdentityProvider: Send + Sync {
    /// Create an account; the display name is stored with it
    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<()>;

    /// Exchange credentials for a session
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser>;

    /// Resolve the user behind an access token
    async fn current_user(&self, access_token: &str) -> Result<AuthenticatedUser>;

    /// Name from the `users` profile table, if the user has a row there
    async fn profile_name(&self, user_id: &str) -> Result<Option<String>>;

    async fn sign_out(&self, access_token: &str) -> Result<()>;
}

// =============================================================================
// Feedback Store Trait (Infrastructure - persistence)
// =============================================================================

/// Feedback row as persisted. Text fields must already be scrubbed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub user_id: Option<String>,
    pub feedback_text: String,
    pub message_content: String,
}

#[async_trait]
pub trait BaseFeedbackStore: Send + Sync {
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()>;
}
