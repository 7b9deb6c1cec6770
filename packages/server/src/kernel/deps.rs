//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container used by all domain
//! actions. External services sit behind trait abstractions so tests can swap
//! them for the doubles in `test_dependencies`.

use sqlx::PgPool;
use std::sync::Arc;

use crate::domains::auth::JwtService;
use crate::kernel::BaseAI;

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub db_pool: PgPool,
    /// LLM used for assessments, roadmaps and diet plans
    pub ai: Arc<dyn BaseAI>,
    /// JWT service for token creation
    pub jwt_service: Arc<JwtService>,
}

impl ServerDeps {
    pub fn new(db_pool: PgPool, ai: Arc<dyn BaseAI>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            db_pool,
            ai,
            jwt_service,
        }
    }
}
