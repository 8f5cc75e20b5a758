//! Admin handlers for badge catalog management.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use triport_core::error::CoreError;
use triport_core::types::DbId;
use triport_db::models::badge::Badge;
use triport_db::repositories::BadgeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /admin/badges/{id}/active`.
#[derive(Debug, Deserialize)]
pub struct SetBadgeActiveRequest {
    pub is_active: bool,
}

/// PUT /api/v1/admin/badges/{id}/active
///
/// Activate or retire a badge. Retired badges stop being awarded but remain
/// on the profiles of users who already earned them.
pub async fn set_badge_active(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetBadgeActiveRequest>,
) -> AppResult<Json<DataResponse<Badge>>> {
    let badge = BadgeRepo::set_active(&state.pool, id, input.is_active)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Badge", id }))?;

    tracing::info!(
        admin_id = admin.user_id,
        badge_id = badge.id,
        is_active = badge.is_active,
        "Badge active flag changed",
    );

    Ok(Json(DataResponse { data: badge }))
}
