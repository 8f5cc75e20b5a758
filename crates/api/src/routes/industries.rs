//! Route definitions for the `/industries` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::industries;
use crate::state::AppState;

/// Routes mounted at `/industries`. Public.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(industries::list_industries))
}
