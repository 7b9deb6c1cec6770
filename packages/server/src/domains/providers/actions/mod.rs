//! Provider domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers.

mod search_providers;

pub use search_providers::*;
