// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{
    AuthenticatedUser, BaseAssistant, BaseFeedbackStore, BaseIdentityProvider, FeedbackRecord,
    ServerDeps,
};

// =============================================================================
// Mock Assistant
// =============================================================================

/// Arguments captured from a chat call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCallArgs {
    pub message: String,
    pub user_id: Option<String>,
    pub is_guest: bool,
}

pub struct MockAssistant {
    replies: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<ChatCallArgs>>>,
}

impl MockAssistant {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful reply
    pub fn with_reply(self, reply: &str) -> Self {
        self.replies.lock().unwrap().push(Ok(reply.to_string()));
        self
    }

    /// Queue a failure (network error, non-2xx, ...)
    pub fn with_failure(self, error: &str) -> Self {
        self.replies.lock().unwrap().push(Err(error.to_string()));
        self
    }

    /// Get all chat calls in order
    pub fn calls(&self) -> Vec<ChatCallArgs> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAssistant {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAssistant for MockAssistant {
    async fn chat(&self, message: &str, user_id: Option<&str>, is_guest: bool) -> Result<String> {
        self.calls.lock().unwrap().push(ChatCallArgs {
            message: message.to_string(),
            user_id: user_id.map(str::to_string),
            is_guest,
        });

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok("Mock reply".to_string());
        }
        replies.remove(0).map_err(|e| anyhow!(e))
    }
}

// =============================================================================
// Mock Identity Provider
// =============================================================================

#[derive(Debug, Clone)]
struct MockAccount {
    id: String,
    password: String,
    display_name: Option<String>,
}

pub struct MockIdentityProvider {
    accounts: Arc<Mutex<HashMap<String, MockAccount>>>,
    profiles: Arc<Mutex<HashMap<String, String>>>,
    signed_out: Arc<Mutex<Vec<String>>>,
    unavailable: bool,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            profiles: Arc::new(Mutex::new(HashMap::new())),
            signed_out: Arc::new(Mutex::new(Vec::new())),
            unavailable: false,
        }
    }

    /// Register an account; `display_name` is stored as account metadata
    pub fn with_account(
        self,
        id: &str,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Self {
        self.accounts.lock().unwrap().insert(
            email.to_string(),
            MockAccount {
                id: id.to_string(),
                password: password.to_string(),
                display_name: display_name.map(str::to_string),
            },
        );
        self
    }

    /// Add a row to the `users` profile table
    pub fn with_profile(self, user_id: &str, name: &str) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(user_id.to_string(), name.to_string());
        self
    }

    /// Make every call fail as if the provider were unreachable
    pub fn unavailable(mut self) -> Self {
        self.unavailable = true;
        self
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts.lock().unwrap().contains_key(email)
    }

    pub fn account_display_name(&self, email: &str) -> Option<String> {
        self.accounts
            .lock()
            .unwrap()
            .get(email)
            .and_then(|a| a.display_name.clone())
    }

    /// Tokens passed to sign_out
    pub fn signed_out_tokens(&self) -> Vec<String> {
        self.signed_out.lock().unwrap().clone()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(anyhow!("identity provider unavailable"));
        }
        Ok(())
    }

    fn token_for(id: &str) -> String {
        format!("token-{}", id)
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseIdentityProvider for MockIdentityProvider {
    async fn sign_up(&self, email: &str, password: &str, display_name: &str) -> Result<()> {
        self.check_available()?;

        let mut accounts = self.accounts.lock().unwrap();
        if accounts.contains_key(email) {
            return Err(anyhow!("User already registered"));
        }
        let id = format!("user-{}", accounts.len() + 1);
        accounts.insert(
            email.to_string(),
            MockAccount {
                id,
                password: password.to_string(),
                display_name: Some(display_name.to_string()),
            },
        );
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthenticatedUser> {
        self.check_available()?;

        let accounts = self.accounts.lock().unwrap();
        match accounts.get(email) {
            Some(account) if account.password == password => Ok(AuthenticatedUser {
                id: account.id.clone(),
                email: Some(email.to_string()),
                display_name: account.display_name.clone(),
                access_token: Self::token_for(&account.id),
            }),
            _ => Err(anyhow!("Invalid login credentials")),
        }
    }

    async fn current_user(&self, access_token: &str) -> Result<AuthenticatedUser> {
        self.check_available()?;

        let accounts = self.accounts.lock().unwrap();
        accounts
            .iter()
            .find(|(_, account)| Self::token_for(&account.id) == access_token)
            .map(|(email, account)| AuthenticatedUser {
                id: account.id.clone(),
                email: Some(email.clone()),
                display_name: account.display_name.clone(),
                access_token: access_token.to_string(),
            })
            .ok_or_else(|| anyhow!("Invalid or expired token"))
    }

    async fn profile_name(&self, user_id: &str) -> Result<Option<String>> {
        self.check_available()?;
        Ok(self.profiles.lock().unwrap().get(user_id).cloned())
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        self.check_available()?;
        self.signed_out
            .lock()
            .unwrap()
            .push(access_token.to_string());
        Ok(())
    }
}

// =============================================================================
// Mock Feedback Store
// =============================================================================

pub struct MockFeedbackStore {
    records: Arc<Mutex<Vec<FeedbackRecord>>>,
    fail: bool,
}

impl MockFeedbackStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    /// Make every insert fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn records(&self) -> Vec<FeedbackRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl Default for MockFeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseFeedbackStore for MockFeedbackStore {
    async fn insert_feedback(&self, record: &FeedbackRecord) -> Result<()> {
        if self.fail {
            return Err(anyhow!("insert into feedback failed"));
        }
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Mock collaborators plus the ServerDeps built from them.
///
/// Keeps typed handles to the mocks so tests can inspect recorded calls.
pub struct TestDependencies {
    pub assistant: Arc<MockAssistant>,
    pub identity: Arc<MockIdentityProvider>,
    pub feedback_store: Arc<MockFeedbackStore>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            assistant: Arc::new(MockAssistant::new()),
            identity: Arc::new(MockIdentityProvider::new()),
            feedback_store: Arc::new(MockFeedbackStore::new()),
        }
    }

    pub fn with_assistant(mut self, assistant: MockAssistant) -> Self {
        self.assistant = Arc::new(assistant);
        self
    }

    pub fn with_identity(mut self, identity: MockIdentityProvider) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    pub fn with_feedback_store(mut self, store: MockFeedbackStore) -> Self {
        self.feedback_store = Arc::new(store);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.assistant.clone(),
            self.identity.clone(),
            self.feedback_store.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
