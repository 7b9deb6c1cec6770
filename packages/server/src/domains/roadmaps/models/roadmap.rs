use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::common::{RoadmapId, UserId};

/// A tracked goal. Ids are `st_N` (short term) or `lt_N` (long term).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoadmapGoal {
    pub id: String,
    pub goal: String,
    pub target_date: String,
    pub completed: bool,
    pub progress_percentage: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RoadmapGoals {
    pub short_term: Vec<RoadmapGoal>,
    pub long_term: Vec<RoadmapGoal>,
}

/// A task within a week. Ids are `w{week}_t{n}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklyTask {
    pub id: String,
    pub task: String,
    pub completed: bool,
    pub due_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeekPlan {
    pub week: u32,
    pub focus: String,
    pub tasks: Vec<WeeklyTask>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HealthRoadmap {
    pub id: RoadmapId,
    pub user_id: UserId,
    pub goals: Json<RoadmapGoals>,
    pub weekly_plan: Json<Vec<WeekPlan>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HealthRoadmap {
    pub async fn create(
        user_id: UserId,
        goals: &RoadmapGoals,
        weekly_plan: &[WeekPlan],
        pool: &PgPool,
    ) -> Result<Self> {
        let roadmap = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO health_roadmaps (id, user_id, goals, weekly_plan)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(RoadmapId::new())
        .bind(user_id)
        .bind(Json(goals))
        .bind(Json(weekly_plan))
        .fetch_one(pool)
        .await?;
        Ok(roadmap)
    }

    pub async fn find_by_user(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let roadmaps = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM health_roadmaps
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(roadmaps)
    }
}
