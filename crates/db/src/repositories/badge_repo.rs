//! Repository for the `badges` catalog table.

use sqlx::PgPool;
use triport_core::types::DbId;

use crate::models::badge::{Badge, BadgeDefinition};

const COLUMNS: &str = "id, name, description, category, industry, criteria, \
                       icon_url, points, is_active, created_at";

/// Read/seed access to badge definitions.
pub struct BadgeRepo;

impl BadgeRepo {
    /// List active badges eligible for an industry: the industry's own
    /// badges plus universal ones (`industry IS NULL`), cheapest first.
    pub async fn list_active_for_industry(
        pool: &PgPool,
        industry_slug: &str,
    ) -> Result<Vec<Badge>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM badges
             WHERE is_active = TRUE
               AND (industry IS NULL OR industry = $1)
             ORDER BY points ASC, name ASC"
        );
        sqlx::query_as::<_, Badge>(&query)
            .bind(industry_slug)
            .fetch_all(pool)
            .await
    }

    /// Find a badge by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges WHERE id = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Flip a badge's `is_active` flag. Returns the updated row, or `None`
    /// when no badge has that id. Earned `user_badges` rows are untouched.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("UPDATE badges SET is_active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }

    /// Upsert a seed definition keyed on the unique badge name.
    ///
    /// Re-seeding refreshes description, criterion, and points without
    /// touching `is_active` or earned `user_badges` rows.
    pub async fn upsert_definition(
        pool: &PgPool,
        def: &BadgeDefinition,
    ) -> Result<Badge, sqlx::Error> {
        let criteria = serde_json::to_value(&def.criterion)
            .expect("badge criterion serialization is infallible");
        let query = format!(
            "INSERT INTO badges (name, description, category, industry, criteria, icon_url, points)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (name) DO UPDATE SET
                 description = EXCLUDED.description,
                 category = EXCLUDED.category,
                 industry = EXCLUDED.industry,
                 criteria = EXCLUDED.criteria,
                 icon_url = EXCLUDED.icon_url,
                 points = EXCLUDED.points
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Badge>(&query)
            .bind(def.name)
            .bind(def.description)
            .bind(def.category.as_str())
            .bind(def.industry)
            .bind(criteria)
            .bind(def.icon_url)
            .bind(def.points)
            .fetch_one(pool)
            .await
    }
}
