use axum::http::HeaderValue;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use travelsmart::cache::{MemoryCacheService, PathCache};
use travelsmart::config::Config;
use travelsmart::services::location_graph::LocationGraph;
use travelsmart::services::route_metrics::{Clock, SystemClock};
use travelsmart::services::route_optimizer::RouteOptimizer;
use travelsmart::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travelsmart=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting TravelSmart route optimizer");
    tracing::info!("Configuration loaded successfully");

    // Build the static route network
    let graph = Arc::new(LocationGraph::standard_network()?);
    tracing::info!(
        locations = graph.node_count(),
        edges = graph.edge_count(),
        "Location graph ready"
    );

    let clock: Arc<dyn Clock> = match config.eta_utc_offset {
        Some(offset) => {
            tracing::info!("ETA clock using configured offset {}", offset);
            Arc::new(SystemClock::new(offset))
        }
        None => Arc::new(SystemClock::local()),
    };

    let cache: Option<Arc<dyn PathCache>> = if config.route_cache_enabled {
        tracing::info!(
            ttl_seconds = config.route_cache_ttl,
            max_entries = config.route_cache_max_entries,
            "Using in-memory path cache"
        );
        Some(Arc::new(MemoryCacheService::new(
            config.route_cache_ttl,
            config.route_cache_max_entries,
        )))
    } else {
        tracing::info!("Path cache disabled");
        None
    };

    let state = Arc::new(AppState {
        optimizer: RouteOptimizer::new(graph, config.pricing.clone(), clock),
        cache,
    });

    let cors = match config.client_url {
        Some(ref origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    // Build router with CORS and tracing
    let app = travelsmart::routes::create_app(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
