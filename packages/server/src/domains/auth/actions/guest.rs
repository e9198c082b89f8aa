use tracing::info;

use crate::domains::auth::models::GuestSession;

/// Start a guest session. Guests never touch the identity provider.
pub fn create_guest_session() -> GuestSession {
    let session = GuestSession::new();
    info!(guest_name = %session.name, "Guest session created");
    session
}
