pub mod debug;
pub mod optimize;
pub mod route_data;

use axum::{routing::{get, post}, Router};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/routes/optimize", post(optimize::optimize_route))
        .route("/routes/route-data", post(route_data::get_route_data))
        .route("/routes/locations", get(route_data::list_locations))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}

/// Full application router: service banner at `/`, API under `/api`.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(debug::index))
        .nest("/api", create_router(state))
}
