//! Proximity search over the provider catalog.
//!
//! Pure computation: filter by specialty/insurance, annotate each provider
//! with its haversine distance from the query point, drop everything beyond
//! the radius, and order nearest-first. Ties keep catalog order.
//!
//! NaN coordinates (query or provider) yield NaN distances, which never
//! satisfy `distance <= radius`, so those providers are silently left out.

use serde::Serialize;

use super::models::Provider;
use crate::common::utils::GeoPoint;

/// Radius used when the caller does not supply one.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// Specialty value that disables specialty filtering.
const ALL_SPECIALTIES: &str = "all";

/// Search parameters for a single request
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderQuery {
    pub origin: GeoPoint,
    pub radius_miles: f64,
    /// Case-insensitive substring of the provider specialty
    pub specialty: Option<String>,
    /// Exact plan name the provider must accept
    pub insurance: Option<String>,
}

impl ProviderQuery {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            origin: GeoPoint::new(latitude, longitude),
            radius_miles: DEFAULT_RADIUS_MILES,
            specialty: None,
            insurance: None,
        }
    }

    pub fn radius(mut self, radius_miles: f64) -> Self {
        self.radius_miles = radius_miles;
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }

    pub fn insurance(mut self, insurance: impl Into<String>) -> Self {
        self.insurance = Some(insurance.into());
        self
    }

    /// The active specialty filter, if any. Empty and "all" disable it.
    pub fn specialty_filter(&self) -> Option<&str> {
        self.specialty
            .as_deref()
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case(ALL_SPECIALTIES))
    }

    /// The active insurance filter, if any. Empty disables it.
    pub fn insurance_filter(&self) -> Option<&str> {
        self.insurance.as_deref().filter(|s| !s.is_empty())
    }

    fn admits(&self, provider: &Provider) -> bool {
        let specialty_ok = self.specialty_filter().map_or(true, |needle| {
            provider
                .specialty
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let insurance_ok = self
            .insurance_filter()
            .map_or(true, |plan| provider.accepted_insurance.iter().any(|p| p == plan));

        specialty_ok && insurance_ok
    }
}

/// A provider within the search radius, annotated with its distance
#[derive(Debug, Clone, Serialize)]
pub struct ProviderMatch {
    #[serde(flatten)]
    pub provider: Provider,
    /// Great-circle distance from the query point, in miles
    pub distance: f64,
}

/// Run a proximity search over `catalog`.
///
/// Never fails; an empty catalog or a radius `<= 0` gives an empty result.
/// The catalog is only read, so concurrent searches can share it.
pub fn search(catalog: &[Provider], query: &ProviderQuery) -> Vec<ProviderMatch> {
    // `!(r > 0)` also rejects a NaN radius
    if !(query.radius_miles > 0.0) {
        return Vec::new();
    }

    let mut matches: Vec<ProviderMatch> = catalog
        .iter()
        .filter(|provider| query.admits(provider))
        .filter_map(|provider| {
            let distance = query.origin.distance_miles(&provider.location());
            (distance <= query.radius_miles).then(|| ProviderMatch {
                provider: provider.clone(),
                distance,
            })
        })
        .collect();

    // stable: equal distances keep catalog order
    matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    matches
}
