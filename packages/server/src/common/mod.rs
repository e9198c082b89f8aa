// Text pipelines and validation shared across the application

pub mod formatting;
pub mod pii;
pub mod validation;

pub use formatting::{format_bullets_for_markdown, render_markdown, render_message_markdown};
pub use pii::{scrub_pii, scrub_pii_with_report, RedactionCategory, ScrubResult};
pub use validation::{validate_sign_in_form, validate_sign_up_form, FormErrors};
