//! Kernel module - collaborator traits and the dependency container.

pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use deps::{AssistantAdapter, IdentityAdapter, ServerDeps};
pub use test_dependencies::{
    ChatCallArgs, MockAssistant, MockFeedbackStore, MockIdentityProvider, TestDependencies,
};
pub use traits::*;
