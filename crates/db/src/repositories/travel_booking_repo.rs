//! Repository for the `travel_bookings` table.

use sqlx::PgPool;
use triport_core::types::DbId;

use crate::models::travel::{CreateTravelBooking, TravelBooking};

const COLUMNS: &str = "id, user_id, booking_type, customer_name, destination, \
                       start_date, end_date, price_cents, created_at, updated_at";

/// Provides CRUD operations for travel bookings.
pub struct TravelBookingRepo;

impl TravelBookingRepo {
    /// Insert a new booking of the given type (`"flight"` or `"hotel"`).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        booking_type: &str,
        input: &CreateTravelBooking,
    ) -> Result<TravelBooking, sqlx::Error> {
        let query = format!(
            "INSERT INTO travel_bookings (user_id, booking_type, customer_name, destination, start_date, end_date, price_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TravelBooking>(&query)
            .bind(user_id)
            .bind(booking_type)
            .bind(&input.customer_name)
            .bind(&input.destination)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.price_cents)
            .fetch_one(pool)
            .await
    }

    /// List a user's bookings, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<TravelBooking>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM travel_bookings WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, TravelBooking>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count a user's bookings (badge criterion input).
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM travel_bookings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }
}
