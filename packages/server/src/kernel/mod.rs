//! Kernel module - server infrastructure and dependencies.

pub mod ai;
pub mod deps;
pub mod test_dependencies;
pub mod traits;

pub use ai::OpenAIClient;
pub use deps::ServerDeps;
pub use test_dependencies::MockAI;
pub use traits::*;
