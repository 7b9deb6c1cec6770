use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde_json::{json, Value};

use crate::common::Validate;
use crate::domains::diet_plans::actions::{generate_diet_plan, list_diet_plans};
use crate::domains::diet_plans::{DietPlanReport, GenerateDietPlanInput};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// `POST /api/diet-plan/generate`
pub async fn generate_diet_plan_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<GenerateDietPlanInput>, JsonRejection>,
) -> Result<Json<DietPlanReport>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let report = generate_diet_plan(user.user_id, input, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to generate diet plan", e))?;

    Ok(Json(report))
}

/// `GET /api/diet-plan/generate`
pub async fn list_diet_plans_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let diet_plans = list_diet_plans(user.user_id, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch diet plans", e))?;

    Ok(Json(json!({ "dietPlans": diet_plans })))
}
