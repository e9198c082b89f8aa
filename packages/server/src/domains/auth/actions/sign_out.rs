use tracing::{error, info};

use crate::domains::auth::errors::AuthError;
use crate::kernel::ServerDeps;

pub async fn sign_out(access_token: &str, deps: &ServerDeps) -> Result<(), AuthError> {
    deps.identity.sign_out(access_token).await.map_err(|e| {
        error!(error = %e, "Error during logout");
        AuthError::Provider(e)
    })?;

    info!("User signed out");
    Ok(())
}
