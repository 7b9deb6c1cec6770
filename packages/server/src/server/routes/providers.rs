use axum::{
    extract::{rejection::QueryRejection, Extension, Query},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::domains::providers::actions::search_providers;
use crate::domains::providers::{ProviderQuery, DEFAULT_RADIUS_MILES};
use crate::server::app::AppState;
use crate::server::error::ApiError;
use crate::server::middleware::AuthUser;

/// Raw query string; numbers are parsed by hand so bad input gets our 400 body
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub specialty: Option<String>,
    pub insurance: Option<String>,
}

impl SearchParams {
    fn into_query(self) -> Result<ProviderQuery, ApiError> {
        let lat = parse_number("lat", self.lat.as_deref(), 0.0)?;
        let lng = parse_number("lng", self.lng.as_deref(), 0.0)?;
        let radius = parse_number("radius", self.radius.as_deref(), DEFAULT_RADIUS_MILES)?;

        let mut query = ProviderQuery::new(lat, lng).radius(radius);
        if let Some(specialty) = self.specialty {
            query = query.specialty(specialty);
        }
        if let Some(insurance) = self.insurance {
            query = query.insurance(insurance);
        }
        Ok(query)
    }
}

/// Absent or empty takes the default
fn parse_number(name: &str, raw: Option<&str>, default: f64) -> Result<f64, ApiError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(default),
        Some(s) => s
            .parse::<f64>()
            .map_err(|_| ApiError::BadRequest(format!("Invalid {}: must be a number", name))),
    }
}

/// `GET /api/providers/search`
pub async fn search_providers_handler(
    Extension(state): Extension<AppState>,
    _user: AuthUser,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(params) = params?;
    let query = params.into_query()?;

    let providers = search_providers(&query, &state.deps)
        .await
        .map_err(|e| ApiError::internal("Failed to search providers", e))?;

    Ok(Json(json!({ "providers": providers })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = SearchParams::default().into_query().unwrap();
        assert_eq!(query.origin.latitude, 0.0);
        assert_eq!(query.origin.longitude, 0.0);
        assert_eq!(query.radius_miles, DEFAULT_RADIUS_MILES);
        assert!(query.specialty.is_none());
    }

    #[test]
    fn test_parses_numbers_and_filters() {
        let params = SearchParams {
            lat: Some("40.7128".to_string()),
            lng: Some("-74.0060".to_string()),
            radius: Some("10".to_string()),
            specialty: Some("cardio".to_string()),
            insurance: Some("Aetna".to_string()),
        };

        let query = params.into_query().unwrap();
        assert_eq!(query.origin.latitude, 40.7128);
        assert_eq!(query.radius_miles, 10.0);
        assert_eq!(query.specialty_filter(), Some("cardio"));
        assert_eq!(query.insurance_filter(), Some("Aetna"));
    }

    #[test]
    fn test_empty_value_uses_default() {
        let params = SearchParams {
            radius: Some("".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_query().unwrap().radius_miles, DEFAULT_RADIUS_MILES);
    }

    #[test]
    fn test_unparseable_number_is_bad_request() {
        let params = SearchParams {
            lat: Some("north".to_string()),
            ..Default::default()
        };
        let err = params.into_query().unwrap_err();
        assert_eq!(err.to_string(), "Invalid lat: must be a number");
    }
}
