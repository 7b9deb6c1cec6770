//! Providers domain - healthcare provider catalog and proximity search

pub mod actions;
pub mod models;
pub mod search;

// Re-export commonly used types
pub use models::{CreateProvider, Provider};
pub use search::{search, ProviderMatch, ProviderQuery, DEFAULT_RADIUS_MILES};
