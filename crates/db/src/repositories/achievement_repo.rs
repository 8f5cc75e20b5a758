//! Repository for the `achievements` event log.

use sqlx::PgPool;
use triport_core::types::DbId;

use crate::models::achievement::{Achievement, CreateAchievement};

const COLUMNS: &str =
    "id, user_id, achievement_type, category, description, points, metadata, achieved_at";

/// Append/read access to the achievement log. Rows are never updated.
pub struct AchievementRepo;

impl AchievementRepo {
    /// Append an achievement, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAchievement,
    ) -> Result<Achievement, sqlx::Error> {
        let query = format!(
            "INSERT INTO achievements (user_id, achievement_type, category, description, points, metadata)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(input.user_id)
            .bind(&input.achievement_type)
            .bind(&input.category)
            .bind(&input.description)
            .bind(input.points)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// A user's achievements within a trailing window of hours, most recent
    /// first, capped at `limit`. Used for the "what just happened" summary.
    pub async fn recent_for_user(
        pool: &PgPool,
        user_id: DbId,
        window_hours: i64,
        limit: i64,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements
             WHERE user_id = $1
               AND achieved_at > NOW() - ($2 * INTERVAL '1 hour')
             ORDER BY achieved_at DESC
             LIMIT $3"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(user_id)
            .bind(window_hours)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// All of a user's achievements, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Achievement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM achievements WHERE user_id = $1 ORDER BY achieved_at DESC"
        );
        sqlx::query_as::<_, Achievement>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
