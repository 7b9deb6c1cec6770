//! Auth domain - accounts, password login and session tokens

pub mod actions;
pub mod jwt;
pub mod models;
pub mod password;

pub use actions::{AuthSession, LoginInput, PublicUser, RegisterInput};
pub use jwt::{Claims, JwtService, TOKEN_TTL_HOURS};
pub use models::{CreateUser, User};
