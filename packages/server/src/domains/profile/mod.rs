//! Profile domain - per-user medical history

pub mod actions;
pub mod models;

pub use actions::UpdateProfileInput;
pub use models::{EmergencyContact, Gender, HealthContext, UserProfile};
