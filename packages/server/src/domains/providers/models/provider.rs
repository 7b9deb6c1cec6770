use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::utils::GeoPoint;
use crate::common::ProviderId;

/// Healthcare provider - read-only reference data for search
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Provider {
    pub id: ProviderId,

    // Profile
    pub name: String,
    pub specialty: String,
    pub subspecialties: Vec<String>,

    // Address
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,

    // Location (WGS84 degrees)
    pub latitude: f64,
    pub longitude: f64,

    // Contact
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,

    // Reputation
    pub rating: Option<f64>,
    pub reviews_count: i32,

    pub accepted_insurance: Vec<String>,
    pub telemedicine_available: bool,
    pub verified: bool,

    // Timestamps
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for adding a provider to the catalog
#[derive(Debug, Clone, Default)]
pub struct CreateProvider {
    pub name: String,
    pub specialty: String,
    pub subspecialties: Vec<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub accepted_insurance: Vec<String>,
    pub telemedicine_available: bool,
    pub verified: bool,
}

impl Provider {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Load the search catalog, pre-filtered in SQL.
    ///
    /// `specialty` is a case-insensitive partial match and `insurance` an
    /// array-contains test. Both are narrowing only: the in-memory search
    /// applies the same filters again. Rows come back in catalog order
    /// (insertion time, then id) so distance ties stay deterministic.
    pub async fn find_for_search(
        specialty: Option<&str>,
        insurance: Option<&str>,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let specialty_pattern = specialty.map(|s| format!("%{}%", escape_like(s)));

        let providers = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM healthcare_providers
            WHERE ($1::text IS NULL OR specialty ILIKE $1)
              AND ($2::text IS NULL OR accepted_insurance @> ARRAY[$2::text])
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(specialty_pattern)
        .bind(insurance)
        .fetch_all(pool)
        .await?;
        Ok(providers)
    }

    /// Insert a provider into the catalog
    pub async fn create(input: CreateProvider, pool: &PgPool) -> Result<Self> {
        let provider = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO healthcare_providers (
                id, name, specialty, subspecialties, address, city, state, zip_code,
                latitude, longitude, phone, email, website, rating,
                accepted_insurance, telemedicine_available, verified
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING *
            "#,
        )
        .bind(ProviderId::new())
        .bind(&input.name)
        .bind(&input.specialty)
        .bind(&input.subspecialties)
        .bind(&input.address)
        .bind(&input.city)
        .bind(&input.state)
        .bind(&input.zip_code)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.website)
        .bind(input.rating)
        .bind(&input.accepted_insurance)
        .bind(input.telemedicine_available)
        .bind(input.verified)
        .fetch_one(pool)
        .await?;
        Ok(provider)
    }
}

/// Escape LIKE metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("cardio"), "cardio");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
