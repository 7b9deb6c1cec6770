// Business domains
pub mod auth;
pub mod diet_plans;
pub mod profile;
pub mod providers;
pub mod roadmaps;
pub mod symptoms;
