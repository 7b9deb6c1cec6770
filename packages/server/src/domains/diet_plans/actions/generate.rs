use anyhow::{Context, Result};
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::common::validation::require_min_chars;
use crate::common::{DietPlanId, UserId, Validate, ValidationError};
use crate::domains::diet_plans::models::{
    CreateDietPlan, DietPlan, DietPlanDraft, DietPreferences, WeeklyMeals,
};
use crate::domains::profile::models::{join_or, or_unspecified};
use crate::domains::profile::{HealthContext, UserProfile};
use crate::kernel::{generate_json, CompletionOptions, ServerDeps};

const SYSTEM_PROMPT: &str = "You are a nutritionist AI creating personalized meal plans based on health conditions and preferences. \
Respond with a single JSON object.";

const DIET_PLAN_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.4,
    max_tokens: 4000,
};

/// Body of `POST /api/diet-plan/generate`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDietPlanInput {
    pub preferences: DietPreferences,
}

impl Validate for GenerateDietPlanInput {
    fn validate(&self) -> Result<(), ValidationError> {
        require_min_chars("dietType", &self.preferences.diet_type, 1)?;
        let target = self.preferences.calorie_target;
        if !(target.is_finite() && target > 0.0) {
            return Err(ValidationError::new("calorieTarget", "must be a positive number"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanReport {
    pub diet_plan_id: DietPlanId,
    pub weekly_meals: WeeklyMeals,
    pub grocery_list: Vec<String>,
    pub nutritional_summary: Option<Value>,
    pub shopping_list: IndexMap<String, Value>,
}

/// Profile entries first, then request entries not already listed
fn merge_lists(profile: &[String], request: &[String]) -> Vec<String> {
    let mut merged = profile.to_vec();
    for item in request {
        if !merged.iter().any(|m| m.eq_ignore_ascii_case(item)) {
            merged.push(item.clone());
        }
    }
    merged
}

fn build_user_prompt(preferences: &DietPreferences, context: &HealthContext) -> String {
    let conditions = merge_lists(&context.medical_conditions, &preferences.health_conditions);
    let allergies = merge_lists(&context.allergies, &preferences.allergies);
    let cuisines = preferences.cuisines.as_deref().unwrap_or_default();

    format!(
        r#"Create a personalized 7-day diet plan based on:

Preferences:
- Diet type: {diet_type}
- Allergies: {allergies}
- Restrictions: {restrictions}
- Health conditions: {conditions}
- Calorie target: {calories}
- Preferred cuisines: {cuisines}

Patient:
- Age: {age}
- Gender: {gender}
- Weight (kg): {weight}
- Height (cm): {height}

Provide:
1. 7-day meal plan (breakfast, lunch, dinner, 2 snacks)
2. Nutritional breakdown for each meal
3. Shopping list organized by category
4. Preparation tips and time estimates

Format as JSON with the following structure:
{{
  "weeklyPlan": {{
    "monday": {{
      "breakfast": {{
        "name": "string",
        "ingredients": ["string"],
        "calories": number,
        "protein": number,
        "carbs": number,
        "fat": number,
        "prepTime": number,
        "instructions": ["string"]
      }},
      "lunch": {{...}},
      "dinner": {{...}},
      "snacks": [{{...}}]
    }}
  }},
  "shoppingList": {{
    "proteins": ["string"],
    "vegetables": ["string"],
    "fruits": ["string"],
    "grains": ["string"],
    "dairy": ["string"],
    "other": ["string"]
  }},
  "nutritionalSummary": {{
    "dailyAverageCalories": number,
    "dailyAverageProtein": number,
    "dailyAverageCarbs": number,
    "dailyAverageFat": number
  }}
}}"#,
        diet_type = preferences.diet_type.trim(),
        allergies = join_or(&allergies, "None"),
        restrictions = join_or(&preferences.restrictions, "None"),
        conditions = join_or(&conditions, "None"),
        calories = preferences.calorie_target,
        cuisines = join_or(cuisines, "Any"),
        age = or_unspecified(context.age),
        gender = or_unspecified(context.gender.as_deref()),
        weight = or_unspecified(context.weight),
        height = or_unspecified(context.height),
    )
}

/// Generate a seven-day plan for the caller and store it.
#[instrument(skip(input, deps))]
pub async fn generate_diet_plan(
    user_id: UserId,
    input: GenerateDietPlanInput,
    deps: &ServerDeps,
) -> Result<DietPlanReport> {
    let profile = UserProfile::find_by_user_id(user_id, &deps.db_pool).await?;
    let context = HealthContext::from_profile(profile.as_ref(), Utc::now().date_naive());

    let draft: DietPlanDraft = generate_json(
        deps.ai.as_ref(),
        SYSTEM_PROMPT,
        &build_user_prompt(&input.preferences, &context),
        DIET_PLAN_OPTIONS,
    )
    .await
    .context("Diet plan generation request failed")?;

    let weekly_meals = draft.weekly_meals();
    let grocery_list = draft.grocery_list();

    let plan = DietPlan::create(
        CreateDietPlan {
            user_id,
            preferences: input.preferences,
            weekly_meals: weekly_meals.clone(),
            grocery_list: grocery_list.clone(),
            nutritional_summary: draft.nutritional_summary.clone(),
        },
        &deps.db_pool,
    )
    .await?;

    info!(
        diet_plan_id = %plan.id,
        days = weekly_meals.len(),
        groceries = grocery_list.len(),
        "Diet plan stored"
    );

    Ok(DietPlanReport {
        diet_plan_id: plan.id,
        weekly_meals,
        grocery_list,
        nutritional_summary: draft.nutritional_summary,
        shopping_list: draft.shopping_list,
    })
}

/// All of the caller's diet plans, newest first
pub async fn list_diet_plans(user_id: UserId, deps: &ServerDeps) -> Result<Vec<DietPlan>> {
    DietPlan::find_by_user(user_id, &deps.db_pool).await
}
