// Common types and utilities shared across the application

pub mod auth;
pub mod entity_ids;
pub mod id;
pub mod utils;
pub mod validation;

pub use auth::AuthError;
pub use entity_ids::*;
pub use id::Id;
pub use validation::{Validate, ValidationError};
