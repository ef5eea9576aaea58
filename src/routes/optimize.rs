use crate::cache;
use crate::error::{AppError, Result};
use crate::models::route::{OptimizeRouteRequest, OptimizeRouteResponse};
use crate::models::TransportMode;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

/// POST /routes/optimize
/// Shortest route between two named locations using Dijkstra's algorithm
pub async fn optimize_route(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<OptimizeRouteRequest>, JsonRejection>,
) -> Result<Json<OptimizeRouteResponse>> {
    let Json(request) = payload.map_err(|e| AppError::InvalidRequest(e.body_text()))?;

    let query = state.optimizer.query(
        request.source.as_deref().unwrap_or_default(),
        request.destination.as_deref().unwrap_or_default(),
    )?;
    let mode = TransportMode::from_request(request.transport_mode.as_deref());

    tracing::info!(
        source = %query.source,
        destination = %query.destination,
        mode = %mode,
        "Route optimization request: {} -> {} by {}",
        query.source, query.destination, mode
    );

    let cache_key = cache::path_cache_key(&query);

    // Check cache first
    let cached = match state.cache {
        Some(ref cache) => cache.get_path(&cache_key).await,
        None => None,
    };

    let path = match cached {
        Some(path) => path,
        None => {
            let path = state.optimizer.resolve_path(&query);
            if let Some(ref cache) = state.cache {
                cache.cache_path(&cache_key, &path).await;
            }
            path
        }
    };

    let optimized_route = state.optimizer.build_route(path, mode)?;

    Ok(Json(OptimizeRouteResponse {
        success: true,
        optimized_route,
        message: "Route optimized successfully using Dijkstra algorithm".to_string(),
    }))
}
