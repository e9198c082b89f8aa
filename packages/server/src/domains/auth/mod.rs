//! Auth domain - account sign-up/sign-in and guest sessions
//!
//! Accounts and sessions belong to the external identity provider. This
//! domain validates forms before anything is sent, resolves display names,
//! and hands out guest sessions that never touch the provider.

pub mod actions;
pub mod errors;
pub mod models;

pub use actions::{create_guest_session, resume_session, sign_in, sign_out, sign_up, SignedIn};
pub use errors::AuthError;
pub use models::{guest_request_id, GuestSession, SignInForm, SignUpForm};
