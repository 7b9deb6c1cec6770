use axum::{
    extract::{rejection::JsonRejection, Extension},
    Json,
};
use serde_json::{json, Value};

use crate::common::Validate;
use crate::domains::profile::actions::{get_profile, update_profile};
use crate::domains::profile::UpdateProfileInput;
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// `GET /api/profile`
pub async fn get_profile_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
) -> Result<Json<Value>, ApiError> {
    let profile = get_profile(user.user_id, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to fetch profile", e))?
        .ok_or(ApiError::NotFound("Profile not found"))?;

    Ok(Json(json!({ "profile": profile })))
}

/// `PUT /api/profile`
pub async fn update_profile_handler(
    Extension(state): Extension<AppState>,
    user: AuthUser,
    payload: Result<Json<UpdateProfileInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let profile = update_profile(user.user_id, input, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to update profile", e))?
        .ok_or(ApiError::NotFound("Profile not found"))?;

    Ok(Json(json!({ "profile": profile })))
}
