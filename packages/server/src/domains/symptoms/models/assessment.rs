use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use super::AiAssessment;
use crate::common::{AssessmentId, UserId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Mild => write!(f, "mild"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}

/// A stored symptom assessment
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SymptomAssessment {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub symptoms: Vec<String>,
    pub severity: String,
    pub duration: String,
    pub additional_notes: Option<String>,
    pub ai_assessment: Json<AiAssessment>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateAssessment {
    pub user_id: UserId,
    pub symptoms: Vec<String>,
    pub severity: Severity,
    pub duration: String,
    pub additional_notes: Option<String>,
    pub ai_assessment: AiAssessment,
}

impl SymptomAssessment {
    pub async fn create(input: CreateAssessment, pool: &PgPool) -> Result<Self> {
        let assessment = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO symptom_assessments (
                id, user_id, symptoms, severity, duration, additional_notes, ai_assessment
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(AssessmentId::new())
        .bind(input.user_id)
        .bind(&input.symptoms)
        .bind(input.severity.to_string())
        .bind(&input.duration)
        .bind(&input.additional_notes)
        .bind(Json(&input.ai_assessment))
        .fetch_one(pool)
        .await?;
        Ok(assessment)
    }

    /// Most recent assessments for a user, newest first
    pub async fn find_recent_by_user(
        user_id: UserId,
        limit: i64,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let assessments = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM symptom_assessments
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(assessments)
    }
}
