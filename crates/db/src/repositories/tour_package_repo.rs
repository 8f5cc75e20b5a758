//! Repository for the `tour_packages` table.

use sqlx::PgPool;
use triport_core::types::DbId;

use crate::models::tour::{CreateTourPackage, TourPackage};

const COLUMNS: &str = "id, user_id, name, description, destination, duration_days, \
                       price_cents, created_at, updated_at";

/// Provides CRUD operations for tour packages.
pub struct TourPackageRepo;

impl TourPackageRepo {
    /// Insert a new tour package, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTourPackage,
    ) -> Result<TourPackage, sqlx::Error> {
        let query = format!(
            "INSERT INTO tour_packages (user_id, name, description, destination, duration_days, price_cents)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TourPackage>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.destination)
            .bind(input.duration_days)
            .bind(input.price_cents)
            .fetch_one(pool)
            .await
    }

    /// List a user's tour packages, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TourPackage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tour_packages WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TourPackage>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count a user's tour packages (badge criterion input).
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM tour_packages WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
