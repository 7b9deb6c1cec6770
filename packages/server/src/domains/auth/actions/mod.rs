//! Auth domain actions - registration and login

mod login;
mod register;

pub use login::*;
pub use register::*;

use serde::Serialize;

use crate::common::auth::UserRole;
use crate::common::UserId;
use crate::domains::auth::models::User;

/// Account fields safe to return to the client
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: UserRole,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            role: user.role(),
        }
    }
}

/// A freshly issued session
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub user: PublicUser,
    pub token: String,
}
