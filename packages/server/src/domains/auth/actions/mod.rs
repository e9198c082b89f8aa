//! Auth domain actions - business logic functions
//!
//! Actions are async functions called directly from the HTTP handlers.

mod guest;
mod session;
mod sign_in;
mod sign_out;
mod sign_up;

pub use guest::create_guest_session;
pub use session::resume_session;
pub use sign_in::{sign_in, SignedIn};
pub use sign_out::sign_out;
pub use sign_up::sign_up;
