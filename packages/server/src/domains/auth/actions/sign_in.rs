//! Sign in action

use serde::Serialize;
use tracing::{debug, warn};

use crate::domains::auth::errors::AuthError;
use crate::domains::auth::models::SignInForm;
use crate::kernel::{AuthenticatedUser, ServerDeps};

/// Name shown when neither account metadata nor the profile table has one
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// A signed-in user ready to enter the chat
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignedIn {
    pub user_id: String,
    pub display_name: String,
    pub access_token: String,
    pub keep_signed_in: bool,
}

pub async fn sign_in(form: &SignInForm, deps: &ServerDeps) -> Result<SignedIn, AuthError> {
    let errors = form.validate();
    if !errors.is_valid() {
        return Err(AuthError::Validation(errors));
    }

    let user = deps
        .identity
        .sign_in(form.email.trim(), &form.password)
        .await
        .map_err(|e| {
            warn!(error = %e, "Sign-in rejected by identity provider");
            AuthError::Provider(e)
        })?;

    let display_name = resolve_display_name(&user, deps).await;
    debug!(user_id = %user.id, "User signed in");

    Ok(SignedIn {
        user_id: user.id,
        display_name,
        access_token: user.access_token,
        keep_signed_in: form.keep_signed_in,
    })
}

/// Account metadata first, then the `users` profile row, then [`DEFAULT_DISPLAY_NAME`].
///
/// A failing profile lookup is logged and treated as "no profile".
pub(crate) async fn resolve_display_name(user: &AuthenticatedUser, deps: &ServerDeps) -> String {
    if let Some(name) = user.display_name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_string();
    }

    match deps.identity.profile_name(&user.id).await {
        Ok(Some(name)) => name,
        Ok(None) => DEFAULT_DISPLAY_NAME.to_string(),
        Err(e) => {
            warn!(error = %e, user_id = %user.id, "Profile lookup failed");
            DEFAULT_DISPLAY_NAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{MockIdentityProvider, TestDependencies};

    fn form(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: password.to_string(),
            keep_signed_in: true,
        }
    }

    #[tokio::test]
    async fn test_sign_in_uses_metadata_name() {
        let test_deps = TestDependencies::new().with_identity(
            MockIdentityProvider::new().with_account("u1", "jane@example.com", "secret123", Some("Jane")),
        );

        let signed_in = sign_in(&form("jane@example.com", "secret123"), &test_deps.server_deps())
            .await
            .unwrap();

        assert_eq!(signed_in.user_id, "u1");
        assert_eq!(signed_in.display_name, "Jane");
        assert!(signed_in.keep_signed_in);
    }

    #[tokio::test]
    async fn test_sign_in_falls_back_to_profile_then_default() {
        let test_deps = TestDependencies::new().with_identity(
            MockIdentityProvider::new()
                .with_account("u1", "jane@example.com", "secret123", None)
                .with_profile("u1", "Jane From Profile")
                .with_account("u2", "sam@example.com", "secret123", None),
        );
        let deps = test_deps.server_deps();

        let jane = sign_in(&form("jane@example.com", "secret123"), &deps).await.unwrap();
        let sam = sign_in(&form("sam@example.com", "secret123"), &deps).await.unwrap();

        assert_eq!(jane.display_name, "Jane From Profile");
        assert_eq!(sam.display_name, DEFAULT_DISPLAY_NAME);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_provider() {
        let test_deps = TestDependencies::new()
            .with_identity(MockIdentityProvider::new().unavailable());

        let result = sign_in(&form("not-an-email", ""), &test_deps.server_deps()).await;

        match result {
            Err(AuthError::Validation(errors)) => {
                assert!(errors.email.is_some());
                assert!(errors.password.is_some());
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_wrong_password_is_provider_error() {
        let test_deps = TestDependencies::new().with_identity(
            MockIdentityProvider::new().with_account("u1", "jane@example.com", "secret123", None),
        );

        let result = sign_in(&form("jane@example.com", "wrong-pass1"), &test_deps.server_deps()).await;

        assert!(matches!(result, Err(AuthError::Provider(_))));
    }
}
