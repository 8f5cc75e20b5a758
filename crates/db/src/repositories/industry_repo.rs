//! Repository for the `industries` reference table.

use sqlx::PgPool;

use crate::models::industry::IndustryRow;

const COLUMNS: &str = "id, name, description, is_active, created_at";

/// Read access to the seeded industry catalog.
pub struct IndustryRepo;

impl IndustryRepo {
    /// List all active industries in catalog order.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<IndustryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM industries WHERE is_active = TRUE ORDER BY id");
        sqlx::query_as::<_, IndustryRow>(&query).fetch_all(pool).await
    }

    /// Find an industry by its slug id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<IndustryRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM industries WHERE id = $1");
        sqlx::query_as::<_, IndustryRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
