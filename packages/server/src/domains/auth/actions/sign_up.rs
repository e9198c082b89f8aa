//! Sign up action

use tracing::{info, warn};

use crate::domains::auth::errors::AuthError;
use crate::domains::auth::models::SignUpForm;
use crate::kernel::ServerDeps;

/// Validate the form, then create the account with the name as display name.
///
/// Nothing reaches the identity provider unless the form is valid.
pub async fn sign_up(form: &SignUpForm, deps: &ServerDeps) -> Result<(), AuthError> {
    let errors = form.validate();
    if !errors.is_valid() {
        return Err(AuthError::Validation(errors));
    }

    deps.identity
        .sign_up(form.email.trim(), &form.password, form.name.trim())
        .await
        .map_err(|e| {
            warn!(error = %e, "Sign-up rejected by identity provider");
            AuthError::Provider(e)
        })?;

    info!("Account created, confirmation email pending");
    Ok(())
}
