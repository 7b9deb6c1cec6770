//! Test fixtures for creating test data.
//!
//! Accounts go through the HTTP API; catalog providers use the model directly.

use anyhow::Result;
use medassist_core::common::{ProviderId, UserId};
use medassist_core::domains::providers::{CreateProvider, Provider};
use serde_json::json;
use sqlx::PgPool;
use uuid::Uuid;

use super::ApiClient;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// A registered account and its session token
pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub token: String,
}

/// An email no other test uses
pub fn unique_email() -> String {
    format!("patient-{}@example.com", Uuid::new_v4().simple())
}

/// A specialty name no other test uses, so catalog searches stay isolated
pub fn unique_specialty(base: &str) -> String {
    format!("{} {}", base, Uuid::new_v4().simple())
}

/// Register a fresh account through the API
pub async fn register_user(api: &ApiClient) -> TestUser {
    let email = unique_email();
    let response = api
        .post(
            "/api/auth/register",
            json!({
                "email": email,
                "password": TEST_PASSWORD,
                "fullName": "Pat Doe"
            }),
            None,
        )
        .await;

    assert!(
        response.status.is_success(),
        "registration failed: {:?}",
        response.body
    );

    TestUser {
        id: response.body["user"]["id"]
            .as_str()
            .and_then(|id| id.parse().ok())
            .expect("user id in registration response"),
        email,
        token: response.body["token"]
            .as_str()
            .expect("token in registration response")
            .to_string(),
    }
}

/// Add a provider to the catalog
pub async fn create_provider(
    pool: &PgPool,
    name: &str,
    specialty: &str,
    latitude: f64,
    longitude: f64,
    accepted_insurance: &[&str],
) -> Result<ProviderId> {
    let provider = Provider::create(
        CreateProvider {
            name: name.to_string(),
            specialty: specialty.to_string(),
            latitude,
            longitude,
            accepted_insurance: accepted_insurance.iter().map(|s| s.to_string()).collect(),
            verified: true,
            ..Default::default()
        },
        pool,
    )
    .await?;

    Ok(provider.id)
}
