//! Per-user running point total.

use serde::Serialize;
use sqlx::FromRow;
use triport_core::types::{DbId, Timestamp};

/// A row from the `user_progress` table.
///
/// `total_points` is a monotonic counter, not a derived value; the
/// completion percentage reported by the API is recomputed fresh on every
/// read and the two are allowed to drift.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserProgress {
    pub id: DbId,
    pub user_id: DbId,
    pub total_points: i64,
    pub current_level: i64,
    pub updated_at: Timestamp,
}

/// A leaderboard row: points accumulated within the requested period.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LeaderboardEntry {
    pub user_id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub score: i64,
}
