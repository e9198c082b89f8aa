//! Resume a stored session

use tracing::warn;

use super::sign_in::{resolve_display_name, SignedIn};
use crate::domains::auth::errors::AuthError;
use crate::kernel::ServerDeps;

/// Look up the user behind a stored access token ("keep me signed in").
///
/// Any provider failure means the stored session is unusable and the client
/// should drop it.
pub async fn resume_session(access_token: &str, deps: &ServerDeps) -> Result<SignedIn, AuthError> {
    if access_token.trim().is_empty() {
        return Err(AuthError::InvalidSession);
    }

    let user = deps.identity.current_user(access_token).await.map_err(|e| {
        warn!(error = %e, "Stored session rejected");
        AuthError::InvalidSession
    })?;

    let display_name = resolve_display_name(&user, deps).await;

    Ok(SignedIn {
        user_id: user.id,
        display_name,
        access_token: user.access_token,
        keep_signed_in: true,
    })
}
