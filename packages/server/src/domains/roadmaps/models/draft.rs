//! The model's roadmap reply and its conversion to the tracked form.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{RoadmapGoal, RoadmapGoals, WeekPlan, WeeklyTask};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GoalDraft {
    pub goal: String,
    pub target_date: String,
    pub action_items: Vec<String>,
    pub success_metrics: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WeekDraft {
    pub week: u32,
    pub focus: String,
    pub tasks: Vec<String>,
    pub checkpoints: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapDraft {
    pub short_term_goals: Vec<GoalDraft>,
    /// Requested from the model but not tracked
    pub medium_term_goals: Vec<GoalDraft>,
    pub long_term_goals: Vec<GoalDraft>,
    pub weekly_plan: Vec<WeekDraft>,
    pub recommendations: Vec<String>,
}

impl RoadmapDraft {
    /// Short- and long-term goals with fresh progress tracking
    pub fn tracked_goals(&self) -> RoadmapGoals {
        RoadmapGoals {
            short_term: track_goals("st", &self.short_term_goals),
            long_term: track_goals("lt", &self.long_term_goals),
        }
    }

    /// Weekly plan with task ids and due dates counted from `now`.
    ///
    /// Fails when a week number puts the due date outside the supported range.
    pub fn scheduled_weeks(&self, now: DateTime<Utc>) -> Result<Vec<WeekPlan>> {
        self.weekly_plan
            .iter()
            .map(|week| {
                let due_date = Duration::try_weeks(i64::from(week.week))
                    .and_then(|offset| now.checked_add_signed(offset))
                    .ok_or_else(|| anyhow!("Week {} is out of range", week.week))?;

                Ok(WeekPlan {
                    week: week.week,
                    focus: week.focus.clone(),
                    tasks: week
                        .tasks
                        .iter()
                        .enumerate()
                        .map(|(i, task)| WeeklyTask {
                            id: format!("w{}_t{}", week.week, i + 1),
                            task: task.clone(),
                            completed: false,
                            due_date,
                        })
                        .collect(),
                })
            })
            .collect()
    }
}

fn track_goals(prefix: &str, drafts: &[GoalDraft]) -> Vec<RoadmapGoal> {
    drafts
        .iter()
        .enumerate()
        .map(|(i, draft)| RoadmapGoal {
            id: format!("{}_{}", prefix, i + 1),
            goal: draft.goal.clone(),
            target_date: draft.target_date.clone(),
            completed: false,
            progress_percentage: 0,
        })
        .collect()
}
