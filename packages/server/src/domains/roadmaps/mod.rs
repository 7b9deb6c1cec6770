//! Roadmaps domain - personalized multi-week health plans

pub mod actions;
pub mod models;

pub use actions::{GenerateRoadmapInput, RoadmapPreferences, RoadmapReport};
pub use models::{HealthRoadmap, RoadmapDraft, RoadmapGoal, RoadmapGoals, WeeklyTask, WeekPlan};
