// HTTP routes
pub mod auth;
pub mod chat;
pub mod feedback;
pub mod health;
pub mod text;

pub use auth::*;
pub use chat::*;
pub use feedback::*;
pub use health::*;
pub use text::*;
