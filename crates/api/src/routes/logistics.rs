//! Route definitions for the `/logistics` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::logistics;
use crate::state::AppState;

/// Routes mounted at `/logistics`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/shipments",
        get(logistics::list_shipments).post(logistics::create_shipment),
    )
}
