//! Route definitions for the `/travel` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::travel;
use crate::state::AppState;

/// Routes mounted at `/travel`.
///
/// ```text
/// GET  /bookings         -> list bookings (flights and hotels)
/// POST /bookings/flight  -> create flight booking
/// POST /bookings/hotel   -> create hotel booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", get(travel::list_bookings))
        .route("/bookings/flight", post(travel::create_flight_booking))
        .route("/bookings/hotel", post(travel::create_hotel_booking))
}
