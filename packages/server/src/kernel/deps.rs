//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by the chat
//! and auth actions. Both external services sit behind trait objects so tests
//! can swap in the mocks from `test_dependencies`.

use anyhow::Result;
use assistant_client::{AssistantClient, ChatRequest};
use async_trait::async_trait;
use identity_client::{FeedbackRow, IdentityService, User};
use std::sync::Arc;

use crate::kernel::{
    AuthenticatedUser, BaseAssistant, BaseFeedbackStore, BaseIdentityProvider, FeedbackRecord,
};

// =============================================================================
// AssistantClient Adapter (implements BaseAssistant trait)
// =============================================================================

/// Wrapper around AssistantClient that implements BaseAssistant trait
pub struct AssistantAdapter(pub Arc<AssistantClient>);

impl AssistantAdapter {
    pub fn new(client: Arc<AssistantClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseAssistant for AssistantAdapter {
    async fn chat(&self, message: &str, user_id: Option<&str>, is_guest: bool) -> Result<String> {
        let request = ChatRequest::new(message, user_id.map(str::to_string), is_guest);
        Ok(self.0.chat(&request).await?)
    }
}

// =============================================================================
// IdentityService Adapter (implements BaseIdentityProvider + BaseFeedbackStore)
// =============================================================================

/// Wrapper around IdentityService; the same provider hosts auth and the feedback table
pub struct IdentityAdapter(pub Arc<IdentityService>);

impl IdentityAdapter {
    pub fn new(service: Arc<IdentityService>) -> Self {
        Self(service)
    }
}

fn to_authenticated(user: User, access_token: String) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        email: user.email,
        display_name: user.user_metadata.display_name,
        access_token,
    }
}

#[async_trait]
impl BaseIdentityProvider for IdentityAdapter {
    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<()> {
        Ok(self.0.sign_up(email, password, display_name).await?)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        let session = self.0.sign_in_with_password(email, password).await?;
        Ok(to_authenticated(session.user, session.access_token))
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthenticatedUser> {
        let user = self.0.get_user(access_token).await?;
        Ok(to_authenticated(user, access_token.to_string()))
    }

    async fn profile_name(&self, user_id: &str) -> Result<Option<String>> {
        let profile = self.0.fetch_profile(user_id).await?;
        Ok(profile.and_then(|p| p.name))
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        Ok(self.0.sign_out(access_token).await?)
    }
}

#[async_trait]
impl BaseFeedbackStore for IdentityAdapter {
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        let row = FeedbackRow {
            user_id: record.user_id.clone(),
            feedback_text: record.feedback_text.clone(),
            message_content: record.message_content.clone(),
        };
        Ok(self.0.insert_feedback(&row).await?)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub assistant: Arc<dyn BaseAssistant>,
    pub identity: Arc<dyn BaseIdentityProvider>,
    pub feedback_store: Arc<dyn BaseFeedbackStore>,
}

impl ServerDeps {
    pub fn new(
        assistant: Arc<dyn BaseAssistant>,
        identity: Arc<dyn BaseIdentityProvider>,
        feedback_store: Arc<dyn BaseFeedbackStore>,
    ) -> Self {
        Self {
            assistant,
            identity,
            feedback_store,
        }
    }
}
