use anyhow::Result;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use tracing::info;

use crate::common::validation::require_min_chars;
use crate::common::{UserId, Validate, ValidationError};
use crate::domains::profile::models::{EmergencyContact, Gender, ProfileChanges, UserProfile};
use crate::kernel::ServerDeps;

/// Body of `PUT /api/profile`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileInput {
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub blood_type: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
    #[serde(default)]
    pub medical_conditions: Vec<String>,
    #[serde(default)]
    pub current_medications: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub family_history: Vec<String>,
}

impl Validate for UpdateProfileInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_chars("fullName", &self.full_name, 2)?;

        for (field, value) in [("height", self.height), ("weight", self.weight)] {
            if let Some(v) = value {
                if !(v.is_finite() && v > 0.0) {
                    return Err(ValidationError::new(field, "must be a positive number"));
                }
            }
        }

        if let Some(dob) = self.date_of_birth {
            if dob > Utc::now().date_naive() {
                return Err(ValidationError::new("dateOfBirth", "must not be in the future"));
            }
        }

        Ok(())
    }
}

impl From<UpdateProfileInput> for ProfileChanges {
    fn from(input: UpdateProfileInput) -> Self {
        Self {
            full_name: input.full_name,
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            height: input.height,
            weight: input.weight,
            blood_type: input.blood_type.filter(|b| !b.trim().is_empty()),
            emergency_contact: input.emergency_contact,
            medical_conditions: clean_list(input.medical_conditions),
            current_medications: clean_list(input.current_medications),
            allergies: clean_list(input.allergies),
            family_history: clean_list(input.family_history),
        }
    }
}

/// Trim entries and drop blanks
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

pub async fn get_profile(user_id: UserId, deps: &ServerDeps) -> Result<Option<UserProfile>> {
    UserProfile::find_by_user_id(user_id, &deps.db_pool).await
}

/// Replace the caller's profile fields. Returns None if no profile exists.
pub async fn update_profile(
    user_id: UserId,
    input: UpdateProfileInput,
    deps: &ServerDeps,
) -> Result<Option<UserProfile>> {
    let profile = UserProfile::update(user_id, input.into(), &deps.db_pool).await?;

    if profile.is_some() {
        info!(user_id = %user_id, "Profile updated");
    }

    Ok(profile)
}
