//! Route definitions for the `/admin` resource. All routes require the
//! `admin` role.

use axum::routing::put;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
pub fn router() -> Router<AppState> {
    Router::new().route("/badges/{id}/active", put(admin::set_badge_active))
}
