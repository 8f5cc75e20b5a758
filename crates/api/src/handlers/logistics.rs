//! Handlers for the logistics vertical.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use triport_core::error::CoreError;
use triport_core::gamification::ActionType;
use triport_db::models::logistics::{CreateShipment, Shipment};
use triport_db::repositories::ShipmentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// Shipment statuses accepted on creation.
const VALID_STATUSES: &[&str] = &["pending", "in_transit", "delivered", "cancelled"];

/// POST /api/v1/logistics/shipments
///
/// Create a shipment and record a SHIPMENT_CREATED action for the engine.
pub async fn create_shipment(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateShipment>,
) -> AppResult<(StatusCode, Json<CreatedResponse<Shipment>>)> {
    if input.origin.trim().is_empty() || input.destination.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "origin and destination must not be empty".into(),
        )));
    }
    if let Some(status) = input.status.as_deref() {
        if !VALID_STATUSES.contains(&status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status '{status}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))));
        }
    }
    if input.weight_kg.is_some_and(|w| w <= 0.0) {
        return Err(AppError::Core(CoreError::Validation(
            "weight_kg must be positive".into(),
        )));
    }

    let shipment = ShipmentRepo::create(&state.pool, auth_user.user_id, &input).await?;

    let gamification = state
        .gamification
        .update(auth_user.user_id, ActionType::ShipmentCreated)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            data: shipment,
            gamification,
        }),
    ))
}

/// GET /api/v1/logistics/shipments
pub async fn list_shipments(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Shipment>>>> {
    let shipments = ShipmentRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: shipments }))
}
