//! Route definitions for the `/gamification` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gamification;
use crate::state::AppState;

/// Routes mounted at `/gamification`. All require authentication.
///
/// ```text
/// GET  /progress          -> progress snapshot
/// POST /progress/update   -> record an action explicitly
/// GET  /badges            -> earned badges
/// GET  /badges/available  -> badge catalog for the user's industry
/// GET  /leaderboard       -> industry leaderboard
/// GET  /achievements      -> achievement history
/// GET  /stats             -> aggregate statistics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress", get(gamification::get_progress))
        .route(
            "/progress/update",
            post(gamification::post_progress_update),
        )
        .route("/badges", get(gamification::get_badges))
        .route(
            "/badges/available",
            get(gamification::get_available_badges),
        )
        .route("/leaderboard", get(gamification::get_leaderboard))
        .route("/achievements", get(gamification::get_achievements))
        .route("/stats", get(gamification::get_stats))
}
