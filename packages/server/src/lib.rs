// Disha - Chat API Core
//
// Backend for the Disha career assistant: PII scrubbing and reply
// formatting, account and guest sessions, and the relay between the web
// client and the remote assistant service.
//
// Each domain keeps its own models and actions under domains/*/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
