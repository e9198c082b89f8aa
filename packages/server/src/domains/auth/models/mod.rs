pub mod forms;
pub mod guest;

pub use forms::{SignInForm, SignUpForm};
pub use guest::{guest_request_id, GuestSession, GUEST_NAMES};
