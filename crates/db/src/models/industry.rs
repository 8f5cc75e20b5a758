//! Industry reference model.

use serde::Serialize;
use sqlx::FromRow;
use triport_core::types::Timestamp;

/// A row from the `industries` table. Seeded once; read-only afterwards.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IndustryRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}
