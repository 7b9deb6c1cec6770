use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};

use crate::common::UserId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
            Gender::PreferNotToSay => write!(f, "prefer_not_to_say"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Medical history profile, one per user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub user_id: UserId,
    pub full_name: String,
    pub email: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<String>,
    /// Centimeters
    pub height: Option<f64>,
    /// Kilograms
    pub weight: Option<f64>,
    pub blood_type: Option<String>,
    pub emergency_contact: Option<Json<EmergencyContact>>,
    pub medical_conditions: Vec<String>,
    pub current_medications: Vec<String>,
    pub allergies: Vec<String>,
    pub family_history: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement of the editable profile fields
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub blood_type: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    pub medical_conditions: Vec<String>,
    pub current_medications: Vec<String>,
    pub allergies: Vec<String>,
    pub family_history: Vec<String>,
}

impl UserProfile {
    /// Age in whole years on `today`, if a birth date is recorded
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let dob = self.date_of_birth?;
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        Some(age.max(0))
    }

    pub async fn find_by_user_id(user_id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let profile =
            sqlx::query_as::<_, Self>("SELECT * FROM user_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(pool)
                .await?;
        Ok(profile)
    }

    /// Create the empty profile that accompanies a new account
    pub async fn create_empty<'e>(
        user_id: UserId,
        full_name: &str,
        email: &str,
        executor: impl PgExecutor<'e>,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO user_profiles (user_id, full_name, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(full_name)
        .bind(email)
        .fetch_one(executor)
        .await
    }

    /// Overwrite the editable fields. Returns None if the user has no profile.
    pub async fn update(
        user_id: UserId,
        changes: ProfileChanges,
        pool: &PgPool,
    ) -> Result<Option<Self>> {
        let profile = sqlx::query_as::<_, Self>(
            r#"
            UPDATE user_profiles
            SET full_name = $2,
                date_of_birth = $3,
                gender = $4,
                height = $5,
                weight = $6,
                blood_type = $7,
                emergency_contact = $8,
                medical_conditions = $9,
                current_medications = $10,
                allergies = $11,
                family_history = $12,
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(changes.full_name.trim())
        .bind(changes.date_of_birth)
        .bind(changes.gender.map(|g| g.to_string()))
        .bind(changes.height)
        .bind(changes.weight)
        .bind(changes.blood_type)
        .bind(changes.emergency_contact.map(Json))
        .bind(&changes.medical_conditions)
        .bind(&changes.current_medications)
        .bind(&changes.allergies)
        .bind(&changes.family_history)
        .fetch_optional(pool)
        .await?;
        Ok(profile)
    }
}
