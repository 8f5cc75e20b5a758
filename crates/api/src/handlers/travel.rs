//! Handlers for the travel-services vertical.
//!
//! Flight and hotel bookings share a table and a BOOKING_CREATED action; the
//! route determines the `booking_type` column, never the client payload.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use triport_core::error::CoreError;
use triport_core::gamification::ActionType;
use triport_db::models::travel::{CreateTravelBooking, TravelBooking};
use triport_db::repositories::TravelBookingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// POST /api/v1/travel/bookings/flight
pub async fn create_flight_booking(
    state: State<AppState>,
    auth_user: AuthUser,
    input: Json<CreateTravelBooking>,
) -> AppResult<(StatusCode, Json<CreatedResponse<TravelBooking>>)> {
    create_booking(state, auth_user, "flight", input).await
}

/// POST /api/v1/travel/bookings/hotel
pub async fn create_hotel_booking(
    state: State<AppState>,
    auth_user: AuthUser,
    input: Json<CreateTravelBooking>,
) -> AppResult<(StatusCode, Json<CreatedResponse<TravelBooking>>)> {
    create_booking(state, auth_user, "hotel", input).await
}

/// GET /api/v1/travel/bookings
pub async fn list_bookings(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<TravelBooking>>>> {
    let bookings = TravelBookingRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: bookings }))
}

async fn create_booking(
    State(state): State<AppState>,
    auth_user: AuthUser,
    booking_type: &str,
    Json(input): Json<CreateTravelBooking>,
) -> AppResult<(StatusCode, Json<CreatedResponse<TravelBooking>>)> {
    if input.customer_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "customer_name must not be empty".into(),
        )));
    }
    if let (Some(start), Some(end)) = (input.start_date, input.end_date) {
        if end < start {
            return Err(AppError::Core(CoreError::Validation(
                "end_date must not be before start_date".into(),
            )));
        }
    }

    let booking =
        TravelBookingRepo::create(&state.pool, auth_user.user_id, booking_type, &input).await?;

    let gamification = state
        .gamification
        .update(auth_user.user_id, ActionType::BookingCreated)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            data: booking,
            gamification,
        }),
    ))
}
