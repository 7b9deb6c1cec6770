use chrono::NaiveDate;

use super::UserProfile;

/// The slice of a profile that is shared with the LLM as patient context.
///
/// Users without a profile get an empty context rather than an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthContext {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub medical_conditions: Vec<String>,
    pub current_medications: Vec<String>,
    pub allergies: Vec<String>,
}

impl HealthContext {
    pub fn from_profile(profile: Option<&UserProfile>, today: NaiveDate) -> Self {
        match profile {
            Some(p) => Self {
                age: p.age_on(today),
                gender: p.gender.clone(),
                height: p.height,
                weight: p.weight,
                medical_conditions: p.medical_conditions.clone(),
                current_medications: p.current_medications.clone(),
                allergies: p.allergies.clone(),
            },
            None => Self::default(),
        }
    }
}

/// Render a list for a prompt line, with a placeholder when empty
pub fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

/// Render an optional value for a prompt line
pub fn or_unspecified<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Not specified".to_string())
}
