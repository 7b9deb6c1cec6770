use anyhow::Result;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::{DietPlanId, UserId};

/// What the user asked for; stored alongside the plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DietPreferences {
    pub diet_type: String,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    #[serde(default)]
    pub health_conditions: Vec<String>,
    /// Daily kcal
    pub calorie_target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,
}

/// One day of meals. Every slot is a list; meal objects are passed through
/// from the model untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayMeals {
    pub breakfast: Vec<Value>,
    pub lunch: Vec<Value>,
    pub dinner: Vec<Value>,
    pub snacks: Vec<Value>,
}

/// Day name (`monday`..`sunday`) to meals, in week order
pub type WeeklyMeals = IndexMap<String, DayMeals>;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DietPlan {
    pub id: DietPlanId,
    pub user_id: UserId,
    pub preferences: Json<DietPreferences>,
    pub weekly_meals: Json<WeeklyMeals>,
    pub grocery_list: Vec<String>,
    pub nutritional_summary: Option<Json<Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateDietPlan {
    pub user_id: UserId,
    pub preferences: DietPreferences,
    pub weekly_meals: WeeklyMeals,
    pub grocery_list: Vec<String>,
    pub nutritional_summary: Option<Value>,
}

impl DietPlan {
    pub async fn create(input: CreateDietPlan, pool: &PgPool) -> Result<Self> {
        let plan = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO diet_plans (
                id, user_id, preferences, weekly_meals, grocery_list, nutritional_summary
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(DietPlanId::new())
        .bind(input.user_id)
        .bind(Json(&input.preferences))
        .bind(Json(&input.weekly_meals))
        .bind(&input.grocery_list)
        .bind(input.nutritional_summary.map(Json))
        .fetch_one(pool)
        .await?;
        Ok(plan)
    }

    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let plans = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM diet_plans
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(plans)
    }
}
