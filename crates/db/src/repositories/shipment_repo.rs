//! Repository for the `shipments` table.

use sqlx::PgPool;
use triport_core::types::DbId;

use crate::models::logistics::{CreateShipment, Shipment};

const COLUMNS: &str = "id, user_id, origin, destination, status, weight_kg, \
                       tracking_notes, created_at, updated_at";

/// Provides CRUD operations for shipments.
pub struct ShipmentRepo;

impl ShipmentRepo {
    /// Insert a new shipment, returning the created row.
    ///
    /// Status defaults to `pending` when the client omits it.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateShipment,
    ) -> Result<Shipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO shipments (user_id, origin, destination, status, weight_kg, tracking_notes)
             VALUES ($1, $2, $3, COALESCE($4, 'pending'), $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Shipment>(&query)
            .bind(user_id)
            .bind(&input.origin)
            .bind(&input.destination)
            .bind(&input.status)
            .bind(input.weight_kg)
            .bind(&input.tracking_notes)
            .fetch_one(pool)
            .await
    }

    /// List a user's shipments, most recent first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Shipment>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM shipments WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Shipment>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count a user's shipments (badge criterion input).
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM shipments WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
