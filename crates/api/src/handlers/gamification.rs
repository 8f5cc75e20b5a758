//! Handlers for the `/gamification` resource.
//!
//! Reads are served straight from the engine service; the one write endpoint
//! (`POST /progress/update`) lets clients record an action explicitly, for
//! flows where the domain write happened out of band.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use triport_core::error::CoreError;
use triport_core::gamification::{ActionType, LeaderboardPeriod};
use triport_core::industry::Industry;
use triport_db::models::achievement::Achievement;
use triport_db::models::badge::{Badge, EarnedBadge};
use triport_db::models::progress::LeaderboardEntry;
use triport_db::repositories::UserRepo;

use crate::engine::{GamificationResult, ProgressSnapshot, UserStats};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default and maximum leaderboard sizes.
const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;
const MAX_LEADERBOARD_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /gamification/leaderboard`.
#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    /// WEEKLY, MONTHLY, QUARTERLY, or YEARLY. Defaults to WEEKLY.
    pub period: Option<String>,
    pub limit: Option<i64>,
}

/// Request body for `POST /gamification/progress/update`.
#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    pub action_type: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/gamification/progress
///
/// The user's completion percentage (recomputed fresh), point total, and level.
pub async fn get_progress(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<ProgressSnapshot>>> {
    let snapshot = state
        .gamification
        .progress(auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth_user.user_id,
            })
        })?;

    Ok(Json(DataResponse { data: snapshot }))
}

/// GET /api/v1/gamification/badges
///
/// Badges the user has earned, most recent first.
pub async fn get_badges(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<EarnedBadge>>>> {
    let badges = state.gamification.earned_badges(auth_user.user_id).await?;
    Ok(Json(DataResponse { data: badges }))
}

/// GET /api/v1/gamification/badges/available
///
/// The active badge catalog for the user's industry (universal badges
/// included). Users without an industry see universal badges only, plus any
/// badges scoped to the catch-all industry.
pub async fn get_available_badges(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Badge>>>> {
    let industry = user_industry(&state, &auth_user).await?;
    let badges = state.gamification.available_badges(industry).await?;
    Ok(Json(DataResponse { data: badges }))
}

/// GET /api/v1/gamification/leaderboard?period=WEEKLY&limit=10
///
/// Ranking of the user's industry peers by achievement points earned within
/// the trailing period window.
pub async fn get_leaderboard(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<LeaderboardQuery>,
) -> AppResult<Json<DataResponse<Vec<LeaderboardEntry>>>> {
    let period = match params.period.as_deref() {
        Some(raw) => LeaderboardPeriod::parse(raw).map_err(AppError::Core)?,
        None => LeaderboardPeriod::Weekly,
    };

    let limit = params.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    if limit < 1 || limit > MAX_LEADERBOARD_LIMIT {
        return Err(AppError::Core(CoreError::Validation(format!(
            "limit must be between 1 and {MAX_LEADERBOARD_LIMIT}"
        ))));
    }

    let industry = user_industry(&state, &auth_user).await?;
    let entries = state
        .gamification
        .leaderboard(industry, period, limit)
        .await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/gamification/achievements
pub async fn get_achievements(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<Achievement>>>> {
    let achievements = state.gamification.achievements(auth_user.user_id).await?;
    Ok(Json(DataResponse { data: achievements }))
}

/// GET /api/v1/gamification/stats
pub async fn get_stats(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<UserStats>>> {
    let stats = state
        .gamification
        .stats(auth_user.user_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "User",
                id: auth_user.user_id,
            })
        })?;

    Ok(Json(DataResponse { data: stats }))
}

/// POST /api/v1/gamification/progress/update
///
/// Record an action explicitly. Unknown action types are rejected with 400.
pub async fn post_progress_update(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ProgressUpdateRequest>,
) -> AppResult<Json<DataResponse<GamificationResult>>> {
    let action = ActionType::parse(&input.action_type).map_err(AppError::Core)?;

    let result = state.gamification.update(auth_user.user_id, action).await;
    Ok(Json(DataResponse { data: result }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the user's industry from the profile row, so a profile industry
/// change rescopes the catalog and leaderboard immediately instead of
/// waiting out the access token's lifetime. The token claim only covers the
/// window where the row has vanished mid-request. Unset or unrecognized
/// industries land in the catch-all bucket.
async fn user_industry(state: &AppState, auth_user: &AuthUser) -> Result<Industry, AppError> {
    let industry = match UserRepo::find_by_id(&state.pool, auth_user.user_id).await? {
        Some(user) => user.industry_id.as_deref().and_then(Industry::from_label),
        None => auth_user.industry,
    };
    Ok(industry.unwrap_or(Industry::Other))
}
