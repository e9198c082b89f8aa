/// PII (Personally Identifiable Information) scrubbing
///
/// Redacts emails, phone numbers, national-id-like numbers, profile URLs,
/// street addresses, messaging-app contacts, LinkedIn profiles and social
/// handles from free text before it is displayed or sent anywhere.
///
/// # Pass order
///
/// Categories are applied one after another, each on the output of the
/// previous pass (see [`RedactionCategory::ALL`]). The order is part of the
/// contract: email runs first so the social-handle pass never sees the `@` of
/// an address.
///
/// # Examples
///
/// ```rust
/// use disha_core::common::pii::scrub_pii;
///
/// let clean = scrub_pii("Contact me at jane.doe@example.com or 555-123-4567");
/// assert_eq!(clean, "Contact me at [EMAIL REDACTED] or [PHONE REDACTED]");
/// ```
///
/// # Integration Points
///
/// - Chat input (scrubbed before it is echoed and before it is sent)
/// - Feedback (both the feedback text and the quoted message)
/// - The `/api/scrub` preview endpoint
pub mod detector;
pub mod redactor;

pub use detector::{detect_pii, PiiFindings, PiiMatch, RedactionCategory};
pub use redactor::{scrub_pii, scrub_pii_with_report, ScrubResult};
