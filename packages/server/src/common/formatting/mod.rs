//! Assistant reply formatting: bullet normalisation and Markdown rendering.

pub mod bullets;
pub mod markdown;

pub use bullets::format_bullets_for_markdown;
pub use markdown::{render_markdown, render_message_markdown};
