use crate::error::{AppError, Result};
use crate::models::route::{LocationsResponse, RouteDataRequest, RouteDataResponse};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

/// POST /routes/route-data
/// Path geometry (waypoints and coordinates) for map visualization
pub async fn get_route_data(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<RouteDataRequest>, JsonRejection>,
) -> Result<Json<RouteDataResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let route = state.optimizer.route_data(
        request.source.as_deref().unwrap_or_default(),
        request.destination.as_deref().unwrap_or_default(),
    )?;

    tracing::debug!(
        waypoints = route.waypoints.len(),
        distance_km = route.distance,
        "Route data resolved"
    );

    Ok(Json(RouteDataResponse {
        success: true,
        route,
        message: "Route data retrieved successfully".to_string(),
    }))
}

/// GET /routes/locations
/// Every location the planner can route between
pub async fn list_locations(State(state): State<Arc<AppState>>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        success: true,
        locations: state.optimizer.locations(),
    })
}
