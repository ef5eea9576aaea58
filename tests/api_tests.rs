use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use travelsmart::cache::PathCache;
use travelsmart::AppState;

mod common;

fn setup_test_app(state: Arc<AppState>) -> Router {
    travelsmart::routes::create_app(state)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn post_raw(app: Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_optimize_endpoint_success() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app,
        "/api/routes/optimize",
        json!({"source": "Coimbatore", "destination": "Ooty", "transportMode": "car"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let route = &json["optimizedRoute"];
    assert_eq!(route["distance"], "86 km");
    assert_eq!(route["totalDistance"], 86.0);
    assert_eq!(route["duration"], "1h 26m");
    assert_eq!(route["eta"], "10:26 AM");
    assert_eq!(route["fuelCost"], 857);
    assert_eq!(route["tollCost"], 166);
    assert_eq!(route["optimizedPath"], json!(["Coimbatore", "Ooty"]));
    assert_eq!(route["algorithm"], "Dijkstra");
}

#[tokio::test]
async fn test_optimize_endpoint_multi_hop() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app,
        "/api/routes/optimize",
        json!({"source": "madurai", "destination": " COIMBATORE "}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["optimizedRoute"]["optimizedPath"],
        json!(["Madurai", "Dindigul", "Palani", "Coimbatore"])
    );
    assert_eq!(json["optimizedRoute"]["transportMode"], "car");
}

#[tokio::test]
async fn test_optimize_endpoint_missing_input() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app.clone(),
        "/api/routes/optimize",
        json!({"source": "Coimbatore"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST, "Should reject missing destination");
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
    assert!(json.get("optimizedRoute").is_none());

    let (status, _) = post_json(
        app,
        "/api/routes/optimize",
        json!({"source": "  ", "destination": "Ooty"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_optimize_endpoint_null_source() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app,
        "/api/routes/optimize",
        json!({"source": null, "destination": "Ooty"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Please provide source and destination");
}

#[tokio::test]
async fn test_optimize_endpoint_malformed_body() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_raw(app, "/api/routes/optimize", "not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn test_optimize_endpoint_unknown_location() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app,
        "/api/routes/optimize",
        json!({"source": "Atlantis", "destination": "Ooty"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert!(json["optimizedRoute"].is_null());
    assert_eq!(json["message"], "Location not found in route network");
}

#[tokio::test]
async fn test_optimize_endpoint_with_cache() {
    let state = common::create_test_state(true);
    let app = setup_test_app(state.clone());

    let body = json!({"source": "Tirunelveli", "destination": "Mysore", "transportMode": "bus"});
    let (_, first) = post_json(app.clone(), "/api/routes/optimize", body.clone()).await;
    // Different spelling of the same pair hits the same cache entry
    let (status, second) = post_json(
        app,
        "/api/routes/optimize",
        json!({"source": "TIRUNELVELI", "destination": "mysore ", "transportMode": "bus"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let stats = state.cache.as_ref().unwrap().get_stats().await;
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
}

#[tokio::test]
async fn test_route_data_endpoint() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app,
        "/api/routes/route-data",
        json!({"source": "Ooty", "destination": "Kotagiri"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let route = &json["route"];
    assert_eq!(route["path"], json!(["Ooty", "Coonoor", "Kotagiri"]));
    assert_eq!(route["distance"], 30.0);
    assert_eq!(route["waypoints"].as_array().unwrap().len(), 3);
    assert_eq!(route["waypoints"][1]["name"], "Coonoor");
    assert_eq!(route["coordinates"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_route_data_endpoint_bad_bodies() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app.clone(),
        "/api/routes/route-data",
        json!({"source": "Ooty", "destination": null}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);

    let (status, json) = post_raw(app, "/api/routes/route-data", "{\"source\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_unknown_locations_are_not_cached() {
    let state = common::create_test_state(true);
    let app = setup_test_app(state.clone());

    for _ in 0..2 {
        let (status, _) = post_json(
            app.clone(),
            "/api/routes/optimize",
            json!({"source": "Atlantis", "destination": "Ooty"}),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let stats = state.cache.as_ref().unwrap().get_stats().await;
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.skipped, 2);
}

#[tokio::test]
async fn test_route_data_endpoint_not_found() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = post_json(
        app,
        "/api/routes/route-data",
        json!({"source": "Ooty", "destination": "Chennai"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["route"].is_null());
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn test_locations_endpoint() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = get_json(app, "/api/routes/locations").await;

    assert_eq!(status, StatusCode::OK);
    let locations = json["locations"].as_array().unwrap();
    assert_eq!(locations.len(), 14);
    assert!(locations.contains(&json!("Ooty")));
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = setup_test_app(common::create_test_state(true));

    let (status, json) = get_json(app, "/api/debug/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["graph"]["locations"], 14);
    assert_eq!(json["checks"]["cache"]["backend"], "memory");
}

#[tokio::test]
async fn test_health_check_without_cache() {
    let app = setup_test_app(common::create_test_state(false));

    let (_, json) = get_json(app, "/api/debug/health").await;
    assert_eq!(json["checks"]["cache"], "disabled");
}

#[tokio::test]
async fn test_index_endpoint() {
    let app = setup_test_app(common::create_test_state(false));

    let (status, json) = get_json(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "TravelSmart Backend API");
    assert_eq!(json["endpoints"]["optimize"], "/api/routes/optimize");
}
