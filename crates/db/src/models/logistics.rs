//! Shipment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triport_core::types::{DbId, Timestamp};

/// A row from the `shipments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Shipment {
    pub id: DbId,
    pub user_id: DbId,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub weight_kg: Option<f64>,
    pub tracking_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a shipment.
#[derive(Debug, Deserialize)]
pub struct CreateShipment {
    pub origin: String,
    pub destination: String,
    pub status: Option<String>,
    pub weight_kg: Option<f64>,
    pub tracking_notes: Option<String>,
}
