//! Route definitions for the `/tours` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tours;
use crate::state::AppState;

/// Routes mounted at `/tours`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/packages",
        get(tours::list_packages).post(tours::create_package),
    )
}
