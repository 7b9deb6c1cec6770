//! Authentication types shared by the auth domain and the HTTP layer.

mod errors;
mod role;

pub use errors::AuthError;
pub use role::UserRole;
