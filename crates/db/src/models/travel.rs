//! Travel booking model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use triport_core::types::{DbId, Timestamp};

/// A row from the `travel_bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TravelBooking {
    pub id: DbId,
    pub user_id: DbId,
    /// `"flight"` or `"hotel"`; set by the handler, not the client.
    pub booking_type: String,
    pub customer_name: String,
    pub destination: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub price_cents: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a travel booking (flight or hotel).
#[derive(Debug, Deserialize)]
pub struct CreateTravelBooking {
    pub customer_name: String,
    pub destination: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub price_cents: Option<i64>,
}
