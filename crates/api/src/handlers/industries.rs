//! Handler for the industry catalog.

use axum::extract::State;
use axum::Json;
use triport_db::models::industry::IndustryRow;
use triport_db::repositories::IndustryRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/industries
///
/// List the active industries. Public; used by the registration form.
pub async fn list_industries(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<IndustryRow>>>> {
    let industries = IndustryRepo::list_active(&state.pool).await?;
    Ok(Json(DataResponse { data: industries }))
}
