use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgExecutor, PgPool};
use tracing::warn;

use crate::common::auth::UserRole;
use crate::common::UserId;

/// Registered account
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an account
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
}

impl User {
    /// Parsed role; unknown values fall back to the least-privileged role
    pub fn role(&self) -> UserRole {
        self.role.parse().unwrap_or_else(|e| {
            warn!(user_id = %self.id, role = %self.role, error = %e, "Unknown stored role");
            UserRole::default()
        })
    }

    /// Find by email (callers pass the normalized, lower-cased address)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        let user = sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(user)
    }

    /// Insert a new account. Fails with a unique violation if the email is taken.
    pub async fn create<'e>(
        input: CreateUser,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (id, email, password_hash, full_name, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(UserId::new())
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.full_name)
        .bind(input.role.to_string())
        .fetch_one(executor)
        .await
    }
}
