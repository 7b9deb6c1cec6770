use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde_json::{json, Value};

use crate::common::Validate;
use crate::domains::symptoms::actions::{analyze_symptoms, list_assessments};
use crate::domains::symptoms::{AnalyzeSymptomsInput, SymptomReport};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// `POST /api/symptoms/analyze`
pub async fn analyze_symptoms_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<AnalyzeSymptomsInput>, JsonRejection>,
) -> Result<Json<SymptomReport>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let report = analyze_symptoms(user.user_id, input, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to analyze symptoms", e))?;

    Ok(Json(report))
}

/// `GET /api/symptoms`
pub async fn list_assessments_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let assessments = list_assessments(user.user_id, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch assessments", e))?;

    Ok(Json(json!({ "assessments": assessments })))
}
