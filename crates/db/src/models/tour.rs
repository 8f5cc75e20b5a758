//! Tour package model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triport_core::types::{DbId, Timestamp};

/// A row from the `tour_packages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TourPackage {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub duration_days: Option<i32>,
    pub price_cents: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tour package.
#[derive(Debug, Deserialize)]
pub struct CreateTourPackage {
    pub name: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub duration_days: Option<i32>,
    pub price_cents: Option<i64>,
}
