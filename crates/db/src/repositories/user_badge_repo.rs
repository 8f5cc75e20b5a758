//! Repository for the `user_badges` join table.

use sqlx::PgPool;
use triport_core::types::DbId;

use crate::models::badge::{EarnedBadge, UserBadge};

const COLUMNS: &str = "id, user_id, badge_id, earned_at";

/// Award bookkeeping: at most one row per `(user_id, badge_id)`.
pub struct UserBadgeRepo;

impl UserBadgeRepo {
    /// Has this user already earned this badge?
    pub async fn exists(pool: &PgPool, user_id: DbId, badge_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM user_badges WHERE user_id = $1 AND badge_id = $2)",
        )
        .bind(user_id)
        .bind(badge_id)
        .fetch_one(pool)
        .await
    }

    /// Award a badge to a user.
    ///
    /// Returns `None` when the `(user_id, badge_id)` row already exists:
    /// under concurrent updates two requests can both pass the existence
    /// check, and the unique constraint makes the second insert a no-op
    /// rather than an error.
    pub async fn award(
        pool: &PgPool,
        user_id: DbId,
        badge_id: DbId,
    ) -> Result<Option<UserBadge>, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_badges (user_id, badge_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, badge_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserBadge>(&query)
            .bind(user_id)
            .bind(badge_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's earned badges with definitions, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<EarnedBadge>, sqlx::Error> {
        sqlx::query_as::<_, EarnedBadge>(
            "SELECT b.id AS badge_id, b.name, b.description, b.category, b.icon_url,
                    b.points, ub.earned_at
             FROM user_badges ub
             JOIN badges b ON b.id = ub.badge_id
             WHERE ub.user_id = $1
             ORDER BY ub.earned_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
