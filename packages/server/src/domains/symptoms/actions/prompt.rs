use crate::domains::profile::models::{join_or, or_unspecified};
use crate::domains::profile::HealthContext;

use super::AnalyzeSymptomsInput;

pub(super) const SYSTEM_PROMPT: &str = "You are a medical AI assistant providing symptom analysis. \
Always emphasize that this is not a substitute for professional medical care. \
Respond with a single JSON object.";

pub(super) fn build_user_prompt(input: &AnalyzeSymptomsInput, context: &HealthContext) -> String {
    let notes = input
        .additional_notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("None");

    format!(
        r#"Analyze the following symptoms and provide a comprehensive assessment.

Patient Information:
- Symptoms: {symptoms}
- Severity: {severity}
- Duration: {duration}
- Additional notes: {notes}
- Age: {age}
- Gender: {gender}
- Medical History: {history}
- Current Medications: {medications}

Please provide:
1. Top 3-5 possible conditions with probability percentages
2. Immediate recommendations
3. Urgency level (low/medium/high/emergency)
4. Detailed analysis
5. Red flag symptoms to watch for
6. Follow-up questions to ask

Format your response as JSON with the following structure:
{{
  "possibleConditions": [
    {{"condition": "string", "probability": number, "description": "string"}}
  ],
  "recommendations": ["string"],
  "urgencyLevel": "low|medium|high|emergency",
  "detailedAnalysis": "string",
  "redFlags": ["string"],
  "followUpQuestions": ["string"]
}}

IMPORTANT: This is for informational purposes only and should not replace professional medical advice."#,
        symptoms = input.symptoms.join(", "),
        severity = input.severity,
        duration = input.duration.trim(),
        notes = notes,
        age = or_unspecified(context.age),
        gender = or_unspecified(context.gender.as_deref()),
        history = join_or(&context.medical_conditions, "None provided"),
        medications = join_or(&context.current_medications, "None provided"),
    )
}
