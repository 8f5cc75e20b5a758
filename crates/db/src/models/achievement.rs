//! Achievement event-log model.

use serde::Serialize;
use sqlx::FromRow;
use triport_core::types::{DbId, Timestamp};

/// A row from the `achievements` table. Append-only; never mutated.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Achievement {
    pub id: DbId,
    pub user_id: DbId,
    pub achievement_type: String,
    pub category: String,
    pub description: String,
    pub points: i64,
    pub metadata: serde_json::Value,
    pub achieved_at: Timestamp,
}

/// DTO for appending an achievement.
pub struct CreateAchievement {
    pub user_id: DbId,
    pub achievement_type: String,
    pub category: String,
    pub description: String,
    pub points: i64,
    pub metadata: serde_json::Value,
}
