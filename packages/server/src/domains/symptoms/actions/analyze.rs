use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::common::{AssessmentId, UserId, Validate, ValidationError};
use crate::domains::profile::{HealthContext, UserProfile};
use crate::domains::symptoms::models::{
    CreateAssessment, Severity, SymptomAnalysis, SymptomAssessment,
};
use crate::kernel::{generate_json, CompletionOptions, ServerDeps};

use super::prompt::{build_user_prompt, SYSTEM_PROMPT};

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and should not replace professional medical advice. Please consult with a healthcare provider for proper diagnosis and treatment.";

/// How many past assessments `GET /api/symptoms` returns
pub const HISTORY_LIMIT: i64 = 10;

const ANALYSIS_OPTIONS: CompletionOptions = CompletionOptions {
    temperature: 0.3,
    max_tokens: 2000,
};

/// Body of `POST /api/symptoms/analyze`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSymptomsInput {
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub duration: String,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl Validate for AnalyzeSymptomsInput {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.symptoms.iter().all(|s| s.trim().is_empty()) {
            return Err(ValidationError::new("symptoms", "at least one symptom is required"));
        }
        if self.duration.trim().is_empty() {
            return Err(ValidationError::new("duration", "must not be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymptomReport {
    pub assessment_id: AssessmentId,
    pub analysis: SymptomAnalysis,
    pub disclaimer: &'static str,
}

/// Ask the model for an assessment of the caller's symptoms and store it.
#[instrument(skip(input, deps), fields(symptom_count = input.symptoms.len()))]
pub async fn analyze_symptoms(
    user_id: UserId,
    input: AnalyzeSymptomsInput,
    deps: &ServerDeps,
) -> Result<SymptomReport> {
    let input = AnalyzeSymptomsInput {
        symptoms: input
            .symptoms
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        ..input
    };

    let profile = UserProfile::find_by_user_id(user_id, &deps.db_pool).await?;
    let context = HealthContext::from_profile(profile.as_ref(), Utc::now().date_naive());

    let analysis: SymptomAnalysis = generate_json(
        deps.ai.as_ref(),
        SYSTEM_PROMPT,
        &build_user_prompt(&input, &context),
        ANALYSIS_OPTIONS,
    )
    .await
    .context("Symptom analysis request failed")?;

    let assessment = SymptomAssessment::create(
        CreateAssessment {
            user_id,
            symptoms: input.symptoms,
            severity: input.severity,
            duration: input.duration.trim().to_string(),
            additional_notes: input.additional_notes,
            ai_assessment: analysis.clone().into(),
        },
        &deps.db_pool,
    )
    .await?;

    info!(
        assessment_id = %assessment.id,
        urgency = ?analysis.urgency_level,
        "Symptom assessment stored"
    );

    Ok(SymptomReport {
        assessment_id: assessment.id,
        analysis,
        disclaimer: DISCLAIMER,
    })
}

/// The caller's most recent assessments, newest first
pub async fn list_assessments(
    user_id: UserId,
    deps: &ServerDeps,
) -> Result<Vec<SymptomAssessment>> {
    SymptomAssessment::find_recent_by_user(user_id, HISTORY_LIMIT, &deps.db_pool).await
}
