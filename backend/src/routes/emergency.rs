//! Emergency care API routes

use crate::error::ApiResult;
use crate::services::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query},
    routing::get,
    Json, Router,
};
use bodysense_shared::{ApiResponse, Doctor, DoctorsQuery};

/// Create emergency routes
pub fn emergency_routes() -> Router<AppState> {
    Router::new().route("/doctors", get(get_doctors))
}

/// GET /api/emergency/doctors?lat=..&lng=.. - Nearby doctors
///
/// Coordinates are accepted but do not filter the listing.
async fn get_doctors(
    query: Result<Query<DoctorsQuery>, QueryRejection>,
) -> ApiResult<Json<ApiResponse<Vec<Doctor>>>> {
    let Query(location) = query?;
    Ok(Json(ApiResponse::ok(CatalogService::emergency_doctors(
        &location,
    ))))
}
