use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::common::{RoadmapId, UserId, Validate, ValidationError};
use crate::domains::profile::models::{join_or, or_unspecified};
use crate::domains::profile::{HealthContext, UserProfile};
use crate::domains::roadmaps::models::{HealthRoadmap, RoadmapDraft, RoadmapGoals, WeekPlan};
use crate::kernel::{generate_json, CompletionOptions, ServerDeps};

const SYSTEM_PROMPT: &str = "You are a health and wellness AI coach creating personalized health roadmaps. \
Respond with a single JSON object.";

const ROADMAP_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.4,
    max_tokens: 3000,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPreferences {
    pub activity_level: String,
    pub time_commitment: String,
    #[serde(default)]
    pub focus_areas: Vec<String>,
}

/// Body of `POST /api/health-roadmap/generate`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRoadmapInput {
    pub health_goals: Vec<String>,
    #[serde(default)]
    pub preferences: Option<RoadmapPreferences>,
}

impl Validate for GenerateRoadmapInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.health_goals.iter().any(|g| g.trim().is_empty()) {
            return Err(ValidationError::new("healthGoals", "must not contain blank goals"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapReport {
    pub roadmap_id: RoadmapId,
    pub goals: RoadmapGoals,
    pub weekly_plan: Vec<WeekPlan>,
    pub recommendations: Vec<String>,
}

fn build_user_prompt(input: &GenerateRoadmapInput, context: &HealthContext) -> String {
    let preferences = match &input.preferences {
        Some(p) => format!(
            "- Activity level: {}\n- Time commitment: {}\n- Focus areas: {}",
            p.activity_level,
            p.time_commitment,
            join_or(&p.focus_areas, "None")
        ),
        None => "- No stated preferences".to_string(),
    };

    format!(
        r#"Based on the following user profile, create a personalized health roadmap:

User Profile:
- Age: {age}
- Gender: {gender}
- Current conditions: {conditions}
- Current medications: {medications}
- Health goals: {goals}

Preferences:
{preferences}

Create a comprehensive 12-week health roadmap with:
1. Short-term goals (1-4 weeks)
2. Medium-term goals (1-3 months)
3. Long-term goals (3-12 months)
4. Weekly action items
5. Milestones and checkpoints
6. General recommendations

Format as JSON with the following structure:
{{
  "shortTermGoals": [
    {{"goal": "string", "targetDate": "string", "actionItems": ["string"], "successMetrics": ["string"]}}
  ],
  "mediumTermGoals": [...],
  "longTermGoals": [...],
  "weeklyPlan": [
    {{"week": number, "focus": "string", "tasks": ["string"], "checkpoints": ["string"]}}
  ],
  "recommendations": ["string"]
}}"#,
        age = or_unspecified(context.age),
        gender = or_unspecified(context.gender.as_deref()),
        conditions = join_or(&context.medical_conditions, "None"),
        medications = join_or(&context.current_medications, "None"),
        goals = join_or(&input.health_goals, "General wellness"),
        preferences = preferences,
    )
}

/// Generate a roadmap for the caller and store its tracked form.
#[instrument(skip(input, deps), fields(goal_count = input.health_goals.len()))]
pub async fn generate_roadmap(
    user_id: UserId,
    input: GenerateRoadmapInput,
    deps: &ServerDeps,
) -> Result<RoadmapReport> {
    let profile = UserProfile::find_by_user_id(user_id, &deps.db_pool).await?;
    let context = HealthContext::from_profile(profile.as_ref(), Utc::now().date_naive());

    let draft: RoadmapDraft = generate_json(
        deps.ai.as_ref(),
        SYSTEM_PROMPT,
        &build_user_prompt(&input, &context),
        ROADMAP_OPTIONS,
    )
    .await
    .context("Roadmap generation request failed")?;

    let goals = draft.tracked_goals();
    let weekly_plan = draft
        .scheduled_weeks(Utc::now())
        .context("Roadmap reply has an unusable weekly plan")?;

    let roadmap = HealthRoadmap::create(user_id, &goals, &weekly_plan, &deps.db_pool).await?;

    info!(
        roadmap_id = %roadmap.id,
        weeks = weekly_plan.len(),
        "Health roadmap stored"
    );

    Ok(RoadmapReport {
        roadmap_id: roadmap.id,
        goals,
        weekly_plan,
        recommendations: draft.recommendations,
    })
}

/// All of the caller's roadmaps, newest first
pub async fn list_roadmaps(user_id: UserId, deps: &ServerDeps) -> Result<Vec<HealthRoadmap>> {
    HealthRoadmap::find_by_user(user_id, &deps.db_pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_defaults_to_general_wellness() {
        let input: GenerateRoadmapInput =
            serde_json::from_value(json!({"healthGoals": []})).unwrap();

        let prompt = build_user_prompt(&input, &HealthContext::default());

        assert!(prompt.contains("- Health goals: General wellness"));
        assert!(prompt.contains("- No stated preferences"));
        assert!(prompt.contains("- Current conditions: None"));
    }

    #[test]
    fn test_prompt_includes_preferences() {
        let input: GenerateRoadmapInput = serde_json::from_value(json!({
            "healthGoals": ["lower blood pressure", "sleep better"],
            "preferences": {
                "activityLevel": "sedentary",
                "timeCommitment": "30 minutes a day",
                "focusAreas": ["cardio"]
            }
        }))
        .unwrap();

        let prompt = build_user_prompt(&input, &HealthContext::default());

        assert!(prompt.contains("- Health goals: lower blood pressure, sleep better"));
        assert!(prompt.contains("- Activity level: sedentary"));
        assert!(prompt.contains("- Focus areas: cardio"));
    }

    #[test]
    fn test_blank_goal_rejected() {
        let input: GenerateRoadmapInput =
            serde_json::from_value(json!({"healthGoals": ["run", " "]})).unwrap();
        assert_eq!(input.validate().unwrap_err().field, "healthGoals");
    }
}
