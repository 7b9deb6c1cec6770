//! Symptoms domain - LLM-backed symptom assessment and history

pub mod actions;
pub mod models;

pub use actions::{AnalyzeSymptomsInput, SymptomReport, DISCLAIMER};
pub use models::{AiAssessment, Severity, SymptomAnalysis, SymptomAssessment, UrgencyLevel};
