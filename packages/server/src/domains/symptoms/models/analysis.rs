use serde::{Deserialize, Serialize};

/// Triage level the model assigns to an assessment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Low,
    Medium,
    High,
    Emergency,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PossibleCondition {
    pub condition: String,
    /// Percentage, 0-100
    #[serde(default)]
    pub probability: f64,
    #[serde(default)]
    pub description: String,
}

/// The model's reply, also returned to the client as-is.
///
/// Missing lists are tolerated; a missing or unknown urgency level is not.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SymptomAnalysis {
    #[serde(default)]
    pub possible_conditions: Vec<PossibleCondition>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    #[serde(default)]
    pub detailed_analysis: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

/// Stored form of [`SymptomAnalysis`] (snake_case keys in `ai_assessment`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiAssessment {
    pub possible_conditions: Vec<PossibleCondition>,
    pub recommendations: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub detailed_analysis: String,
    pub red_flags: Vec<String>,
    pub follow_up_questions: Vec<String>,
}

impl From<SymptomAnalysis> for AiAssessment {
    fn from(analysis: SymptomAnalysis) -> Self {
        Self {
            possible_conditions: analysis.possible_conditions,
            recommendations: analysis.recommendations,
            urgency_level: analysis.urgency_level,
            detailed_analysis: analysis.detailed_analysis,
            red_flags: analysis.red_flags,
            follow_up_questions: analysis.follow_up_questions,
        }
    }
}
