use std::sync::Arc;
use time::macros::datetime;
use time::OffsetDateTime;
use travelsmart::cache::{MemoryCacheService, PathCache};
use travelsmart::config::PricingConfig;
use travelsmart::services::location_graph::LocationGraph;
use travelsmart::services::route_metrics::FixedClock;
use travelsmart::services::route_optimizer::RouteOptimizer;
use travelsmart::AppState;

/// Instant every test clock is frozen at
#[allow(dead_code)]
pub const TEST_NOW: OffsetDateTime = datetime!(2024-03-01 09:00 UTC);

/// Optimizer over the standard network with a frozen clock
#[allow(dead_code)]
pub fn create_test_optimizer() -> RouteOptimizer {
    RouteOptimizer::new(
        Arc::new(LocationGraph::standard_network().unwrap()),
        PricingConfig::default(),
        Arc::new(FixedClock(TEST_NOW)),
    )
}

/// Application state, optionally with an in-memory path cache
#[allow(dead_code)]
pub fn create_test_state(with_cache: bool) -> Arc<AppState> {
    let cache: Option<Arc<dyn PathCache>> = if with_cache {
        Some(Arc::new(MemoryCacheService::new(3600, 100)))
    } else {
        None
    };

    Arc::new(AppState {
        optimizer: create_test_optimizer(),
        cache,
    })
}
