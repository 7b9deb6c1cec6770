// HTTP routes
pub mod auth;
pub mod diet_plans;
pub mod health;
pub mod profile;
pub mod providers;
pub mod roadmaps;
pub mod symptoms;

pub use auth::*;
pub use diet_plans::*;
pub use health::*;
pub use profile::*;
pub use providers::*;
pub use roadmaps::*;
pub use symptoms::*;
