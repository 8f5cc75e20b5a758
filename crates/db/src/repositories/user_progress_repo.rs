//! Repository for the `user_progress` running counter.

use sqlx::PgPool;
use triport_core::progress::POINTS_PER_LEVEL;
use triport_core::types::DbId;

use crate::models::progress::{LeaderboardEntry, UserProgress};

const COLUMNS: &str = "id, user_id, total_points, current_level, updated_at";

/// Upsert/read access to per-user point totals.
pub struct UserProgressRepo;

impl UserProgressRepo {
    /// Credit points to a user, creating the row on first action.
    ///
    /// The level is recomputed in the same statement
    /// (`total_points / POINTS_PER_LEVEL + 1`) so a lost race between two
    /// concurrent actions cannot leave points and level out of step.
    pub async fn add_points(
        pool: &PgPool,
        user_id: DbId,
        points: i64,
    ) -> Result<UserProgress, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_progress (user_id, total_points, current_level)
             VALUES ($1, $2, $2 / {POINTS_PER_LEVEL} + 1)
             ON CONFLICT (user_id) DO UPDATE SET
                 total_points = user_progress.total_points + $2,
                 current_level = (user_progress.total_points + $2) / {POINTS_PER_LEVEL} + 1,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .bind(points)
            .fetch_one(pool)
            .await
    }

    /// The user's progress row, if any action has ever been recorded.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<UserProgress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_progress WHERE user_id = $1");
        sqlx::query_as::<_, UserProgress>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Leaderboard for an industry over a trailing window of days.
    ///
    /// Score is the sum of achievement points earned within the window by
    /// users affiliated with the industry, ranked descending; ties break on
    /// user id for a stable order.
    pub async fn leaderboard(
        pool: &PgPool,
        industry_slug: &str,
        window_days: i64,
        limit: i64,
    ) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
        sqlx::query_as::<_, LeaderboardEntry>(
            "SELECT u.id AS user_id, u.first_name, u.last_name, u.email,
                    COALESCE(SUM(a.points), 0)::BIGINT AS score
             FROM users u
             JOIN achievements a
               ON a.user_id = u.id
              AND a.achieved_at > NOW() - ($2 * INTERVAL '1 day')
             WHERE u.industry_id = $1 AND u.is_active = TRUE
             GROUP BY u.id, u.first_name, u.last_name, u.email
             ORDER BY score DESC, u.id ASC
             LIMIT $3",
        )
        .bind(industry_slug)
        .bind(window_days)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
