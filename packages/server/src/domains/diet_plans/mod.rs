//! Diet plans domain - seven-day meal plans and grocery lists

pub mod actions;
pub mod models;

pub use actions::{DietPlanReport, GenerateDietPlanInput};
pub use models::{DayMeals, DietPlan, DietPlanDraft, DietPreferences, WeeklyMeals};
