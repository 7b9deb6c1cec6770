use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::common::auth::AuthError;
use crate::common::validation::{normalize_email, require_email, require_min_chars};
use crate::common::{Validate, ValidationError};
use crate::domains::auth::models::User;
use crate::domains::auth::password::verify_password;
use crate::kernel::ServerDeps;

use super::{AuthSession, PublicUser};

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl Validate for LoginInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_email("email", &self.email)?;
        require_min_chars("password", &self.password, 6)?;
        Ok(())
    }
}

/// Check credentials and issue a session token.
///
/// Unknown email and wrong password are indistinguishable to the caller.
#[instrument(skip_all)]
pub async fn login(input: LoginInput, deps: &ServerDeps) -> Result<AuthSession, AuthError> {
    let email = normalize_email(&input.email);

    let Some(user) = User::find_by_email(&email, &deps.db_pool).await? else {
        warn!("Login attempt for unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(&input.password, &user.password_hash).await? {
        warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(AuthError::InvalidCredentials);
    }

    let token = deps
        .jwt_service
        .create_token(user.id, user.email.clone(), user.role())?;

    info!(user_id = %user.id, "User logged in");

    Ok(AuthSession {
        user: PublicUser::from(&user),
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_password_minimum_is_six() {
        let ok = LoginInput {
            email: "pat@example.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short = LoginInput {
            email: "pat@example.com".to_string(),
            password: "12345".to_string(),
        };
        assert_eq!(short.validate().unwrap_err().field, "password");
    }
}
