pub mod bearer_token;

pub use bearer_token::*;
