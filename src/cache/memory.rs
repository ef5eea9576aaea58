use crate::cache::{CacheStats, PathCache};
use crate::services::shortest_path::{PathError, PathResult};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Path results held in a moka cache with TTL and bounded capacity.
///
/// Lookups that named an unknown location are never stored: their keys come
/// straight from free-text input and would only evict real routes.
pub struct MemoryCacheService {
    paths: Cache<String, Arc<PathResult>>,
    hits: AtomicU64,
    misses: AtomicU64,
    skipped: AtomicU64,
}

/// Whether a result is tied to the graph rather than to a typo.
fn is_cacheable(result: &PathResult) -> bool {
    !matches!(
        result.error,
        Some(PathError::UnknownSource(_)) | Some(PathError::UnknownDestination(_))
    )
}

impl MemoryCacheService {
    pub fn new(ttl_seconds: u64, max_capacity: u64) -> Self {
        let paths = Cache::builder()
            .time_to_live(Duration::from_secs(ttl_seconds))
            .max_capacity(max_capacity)
            .build();

        MemoryCacheService {
            paths,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            skipped: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl PathCache for MemoryCacheService {
    async fn get_path(&self, key: &str) -> Option<PathResult> {
        match self.paths.get(key).await {
            Some(result) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache hit for path: {}", key);
                Some((*result).clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::debug!("Memory cache miss for path: {}", key);
                None
            }
        }
    }

    async fn cache_path(&self, key: &str, result: &PathResult) {
        if !is_cacheable(result) {
            self.skipped.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Not caching unknown-location lookup: {}", key);
            return;
        }
        self.paths
            .insert(key.to_string(), Arc::new(result.clone()))
            .await;
        tracing::debug!(found = result.found, "Memory cached path: {}", key);
    }

    async fn get_stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let hit_rate = if hits + misses > 0 {
            (hits as f64 / (hits + misses) as f64) * 100.0
        } else {
            0.0
        };

        CacheStats {
            hits,
            misses,
            entries: self.paths.entry_count(),
            skipped: self.skipped.load(Ordering::Relaxed),
            hit_rate,
        }
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
