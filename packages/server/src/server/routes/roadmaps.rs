use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde_json::{json, Value};

use crate::common::Validate;
use crate::domains::roadmaps::actions::{generate_roadmap, list_roadmaps};
use crate::domains::roadmaps::{GenerateRoadmapInput, RoadmapReport};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// `POST /api/health-roadmap/generate`
pub async fn generate_roadmap_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<GenerateRoadmapInput>, JsonRejection>,
) -> Result<Json<RoadmapReport>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let report = generate_roadmap(user.user_id, input, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to generate health roadmap", e))?;

    Ok(Json(report))
}

/// `GET /api/health-roadmap/generate`
pub async fn list_roadmaps_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let roadmaps = list_roadmaps(user.user_id, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch roadmaps", e))?;

    Ok(Json(json!({ "roadmaps": roadmaps })))
}
