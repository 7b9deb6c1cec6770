use serde::Deserialize;
use tracing::{info, instrument};

use crate::common::auth::{AuthError, UserRole};
use crate::common::validation::{normalize_email, require_email, require_min_chars};
use crate::common::{Validate, ValidationError};
use crate::domains::auth::models::{CreateUser, User};
use crate::domains::auth::password::hash_password;
use crate::domains::profile::models::UserProfile;
use crate::kernel::ServerDeps;

use super::{AuthSession, PublicUser};

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl Validate for RegisterInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_email("email", &self.email)?;
        require_min_chars("password", &self.password, 8)?;
        require_min_chars("fullName", &self.full_name, 2)?;
        Ok(())
    }
}

/// Create an account plus its empty profile, and issue a session token.
///
/// Account and profile are written in one transaction.
#[instrument(skip_all)]
pub async fn register(input: RegisterInput, deps: &ServerDeps) -> Result<AuthSession, AuthError> {
    let email = normalize_email(&input.email);
    let full_name = input.full_name.trim().to_string();

    if User::find_by_email(&email, &deps.db_pool).await?.is_some() {
        return Err(AuthError::UserAlreadyExists);
    }

    let password_hash = hash_password(&input.password).await?;

    let mut tx = deps.db_pool.begin().await?;

    let user = User::create(
        CreateUser {
            email: email.clone(),
            password_hash,
            full_name: full_name.clone(),
            role: UserRole::Patient,
        },
        &mut *tx,
    )
    .await
    .map_err(|e| match e {
        // lost a race with a concurrent registration
        sqlx::Error::Database(ref db) if db.is_unique_violation() => AuthError::UserAlreadyExists,
        other => AuthError::DatabaseError(other),
    })?;

    UserProfile::create_empty(user.id, &full_name, &email, &mut *tx).await?;

    tx.commit().await?;

    let token = deps
        .jwt_service
        .create_token(user.id, user.email.clone(), user.role())?;

    info!(user_id = %user.id, "User registered");

    Ok(AuthSession {
        user: PublicUser::from(&user),
        token,
    })
}
