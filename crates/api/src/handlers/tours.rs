//! Handlers for the tour-management vertical.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use triport_core::error::CoreError;
use triport_core::gamification::ActionType;
use triport_db::models::tour::{CreateTourPackage, TourPackage};
use triport_db::repositories::TourPackageRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// POST /api/v1/tours/packages
///
/// Create a tour package and record a TOUR_CREATED action for the engine.
pub async fn create_package(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<CreateTourPackage>,
) -> AppResult<(StatusCode, Json<CreatedResponse<TourPackage>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Package name must not be empty".into(),
        )));
    }
    if input.duration_days.is_some_and(|d| d <= 0) {
        return Err(AppError::Core(CoreError::Validation(
            "duration_days must be positive".into(),
        )));
    }

    let package = TourPackageRepo::create(&state.pool, auth_user.user_id, &input).await?;

    let gamification = state
        .gamification
        .update(auth_user.user_id, ActionType::TourCreated)
        .await;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            data: package,
            gamification,
        }),
    ))
}

/// GET /api/v1/tours/packages
pub async fn list_packages(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<TourPackage>>>> {
    let packages = TourPackageRepo::list_for_user(&state.pool, auth_user.user_id).await?;
    Ok(Json(DataResponse { data: packages }))
}
