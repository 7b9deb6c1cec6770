//! Typed ID definitions for all domain entities.

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for registered accounts.
pub struct User;

/// Marker type for healthcare providers in the search catalog.
pub struct HealthcareProvider;

/// Marker type for stored symptom assessments.
pub struct SymptomAssessment;

/// Marker type for generated health roadmaps.
pub struct HealthRoadmap;

/// Marker type for generated diet plans.
pub struct DietPlan;

// ============================================================================
// Type aliases
// ============================================================================

pub type UserId = Id<User>;

pub type ProviderId = Id<HealthcareProvider>;

pub type AssessmentId = Id<SymptomAssessment>;

pub type RoadmapId = Id<HealthRoadmap>;

pub type DietPlanId = Id<DietPlan>;
