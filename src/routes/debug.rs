use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET / - Service banner
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "TravelSmart Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "optimize": "/api/routes/optimize",
            "routeData": "/api/routes/route-data",
            "locations": "/api/routes/locations",
            "health": "/api/debug/health",
        }
    }))
}

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    let graph = state.optimizer.graph();
    if graph.node_count() == 0 {
        status["checks"]["graph"] = json!({"error": "location graph is empty"});
        status["status"] = json!("error");
    } else {
        status["checks"]["graph"] = json!({
            "locations": graph.node_count(),
            "edges": graph.edge_count(),
        });
    }

    match state.cache {
        Some(ref cache) => {
            let stats = cache.get_stats().await;
            let healthy = cache.health_check().await;
            if !healthy {
                status["status"] = json!("degraded");
            }
            status["checks"]["cache"] = json!({
                "backend": cache.backend_name(),
                "healthy": healthy,
                "stats": stats,
            });
        }
        None => {
            status["checks"]["cache"] = json!("disabled");
        }
    }

    Json(status)
}
