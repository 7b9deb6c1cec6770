// MedAssist - API Core
//
// Backend for a personal health assistant: accounts and medical profiles,
// LLM-backed symptom assessment, health roadmaps and diet plans, and
// proximity search over a healthcare provider catalog.
//
// Domains live in domains/*/ with models (sqlx) and actions (business logic).

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
