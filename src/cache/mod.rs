mod memory;

pub use memory::MemoryCacheService;

use crate::services::route_optimizer::RouteQuery;
use crate::services::shortest_path::PathResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Storage for shortest-path results. The engine is deterministic over the
/// fixed graph, so found routes and disconnected pairs can be reused until
/// they expire. Time- and cost-derived fields are never cached.
#[async_trait]
pub trait PathCache: Send + Sync {
    async fn get_path(&self, key: &str) -> Option<PathResult>;

    async fn cache_path(&self, key: &str, result: &PathResult);

    async fn get_stats(&self) -> CacheStats;

    async fn health_check(&self) -> bool;

    fn backend_name(&self) -> &'static str;
}

/// Cache key for a validated query. Keys are already normalized, so every
/// spelling of the same pair shares one entry.
pub fn path_cache_key(query: &RouteQuery) -> String {
    format!("route:path:{}:{}", query.source, query.destination)
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
    /// Results refused because they named an unknown location
    pub skipped: u64,
    pub hit_rate: f64,
}
