//! Handlers for the authenticated user's profile.
//!
//! Completing the profile (first name, last name, phone all set) is itself a
//! gamified action: the update handler fires a PROFILE_COMPLETED action when
//! the patch transitions the profile from incomplete to complete.

use axum::extract::State;
use axum::Json;
use triport_core::error::CoreError;
use triport_core::gamification::ActionType;
use triport_core::industry::Industry;
use triport_db::models::user::{UpdateProfile, User};
use triport_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{CreatedResponse, DataResponse};
use crate::state::AppState;

/// GET /api/v1/users/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<User>>> {
    let user = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth_user.user_id,
            })
        })?;

    Ok(Json(DataResponse { data: user }))
}

/// PUT /api/v1/users/profile
///
/// Patch the authenticated user's profile. Only provided fields are applied.
/// An `industry_id` field accepts a slug or display name; unknown values are
/// rejected rather than stored.
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(mut input): Json<UpdateProfile>,
) -> AppResult<Json<CreatedResponse<User>>> {
    if let Some(label) = input.industry_id.as_deref() {
        let industry = Industry::from_label(label).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!("Unknown industry '{label}'")))
        })?;
        input.industry_id = Some(industry.slug().to_string());
    }

    let before = UserRepo::find_by_id(&state.pool, auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth_user.user_id,
            })
        })?;
    let was_complete = before.profile_complete();

    let user = UserRepo::update_profile(&state.pool, auth_user.user_id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth_user.user_id,
            })
        })?;

    let gamification = if !was_complete && user.profile_complete() {
        state
            .gamification
            .update(auth_user.user_id, ActionType::ProfileCompleted)
            .await
    } else {
        Default::default()
    };

    Ok(Json(CreatedResponse {
        data: user,
        gamification,
    }))
}
