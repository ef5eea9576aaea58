use crate::config::PricingConfig;
use crate::constants::ALGORITHM_LABEL;
use crate::error::{AppError, Result};
use crate::models::{OptimizedRoute, RouteData, TransportMode, Waypoint};
use crate::services::currency::{format_inr, usd_to_inr};
use crate::services::location_graph::{normalize, LocationGraph};
use crate::services::route_metrics::{self, Clock};
use crate::services::shortest_path::{find_shortest_path, PathResult};
use std::sync::Arc;
use tracing::instrument;

/// Entry point for route requests: validates input, runs the shortest-path
/// engine over the shared graph and derives time and cost figures.
#[derive(Clone)]
pub struct RouteOptimizer {
    graph: Arc<LocationGraph>,
    pricing: PricingConfig,
    clock: Arc<dyn Clock>,
}

/// Validated pair of lookup keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    pub source: String,
    pub destination: String,
}

impl RouteOptimizer {
    pub fn new(graph: Arc<LocationGraph>, pricing: PricingConfig, clock: Arc<dyn Clock>) -> Self {
        RouteOptimizer {
            graph,
            pricing,
            clock,
        }
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// Reject empty endpoints and normalize the rest into lookup keys.
    pub fn query(&self, source: &str, destination: &str) -> Result<RouteQuery> {
        let source = normalize(source);
        let destination = normalize(destination);
        if source.is_empty() || destination.is_empty() {
            return Err(AppError::MissingInput(
                "Please provide source and destination".to_string(),
            ));
        }
        Ok(RouteQuery {
            source,
            destination,
        })
    }

    /// Run the engine for a validated query.
    pub fn resolve_path(&self, query: &RouteQuery) -> PathResult {
        let result = find_shortest_path(&self.graph, &query.source, &query.destination);
        match &result.error {
            None => tracing::debug!(
                source = %query.source,
                destination = %query.destination,
                distance_km = result.distance,
                hops = result.path.len().saturating_sub(1),
                "Shortest path found"
            ),
            Some(reason) => tracing::debug!(
                source = %query.source,
                destination = %query.destination,
                reason = %reason,
                "Shortest path not found"
            ),
        }
        result
    }

    /// Full optimization for free-text endpoints and an optional mode.
    #[instrument(skip(self))]
    pub fn optimize(
        &self,
        source: &str,
        destination: &str,
        transport_mode: Option<&str>,
    ) -> Result<OptimizedRoute> {
        let query = self.query(source, destination)?;
        let path = self.resolve_path(&query);
        self.build_route(path, TransportMode::from_request(transport_mode))
    }

    /// Turn an engine result into the client-facing route.
    pub fn build_route(&self, path: PathResult, mode: TransportMode) -> Result<OptimizedRoute> {
        let path = path.into_result().map_err(AppError::RouteNotFound)?;
        let distance = path.distance;

        let duration = route_metrics::estimated_duration(distance, mode).to_string();
        let eta = route_metrics::eta(&duration, self.clock.now())?;

        let fuel_cost = usd_to_inr(
            route_metrics::fuel_cost_usd(distance, self.pricing.fuel_price_per_km_usd),
            self.pricing.usd_to_inr,
        );
        let toll_cost = usd_to_inr(
            route_metrics::toll_cost_usd(distance, mode, &self.pricing),
            self.pricing.usd_to_inr,
        );

        Ok(OptimizedRoute {
            distance: route_metrics::format_distance(distance),
            duration,
            eta,
            fuel_cost,
            toll_cost,
            fuel_cost_formatted: format_inr(fuel_cost),
            toll_cost_formatted: format_inr(toll_cost),
            optimized_path: self.display_path(&path.path),
            algorithm: ALGORITHM_LABEL.to_string(),
            transport_mode: mode,
            total_distance: distance,
        })
    }

    /// Path geometry for map rendering. Locations without coordinates are
    /// left out of `coordinates` and `waypoints` but stay in `path`.
    #[instrument(skip(self))]
    pub fn route_data(&self, source: &str, destination: &str) -> Result<RouteData> {
        let query = self.query(source, destination)?;
        let path = self
            .resolve_path(&query)
            .into_result()
            .map_err(AppError::RouteDataNotFound)?;

        let mut waypoints = Vec::with_capacity(path.path.len());
        for key in &path.path {
            if let Some(c) = self.graph.coordinates(key) {
                waypoints.push(Waypoint {
                    name: self.display(key),
                    lat: c.lat,
                    lng: c.lng,
                });
            }
        }

        let straight_line_km = match (
            self.graph.coordinates(&query.source),
            self.graph.coordinates(&query.destination),
        ) {
            (Some(a), Some(b)) => Some((a.distance_to(&b) * 10.0).round() / 10.0),
            _ => None,
        };

        Ok(RouteData {
            coordinates: path
                .path
                .iter()
                .filter_map(|key| self.graph.coordinates(key))
                .collect(),
            waypoints,
            path: self.display_path(&path.path),
            distance: path.distance,
            straight_line_km,
        })
    }

    /// Display names of every known location.
    pub fn locations(&self) -> Vec<String> {
        self.graph.locations()
    }

    fn display(&self, key: &str) -> String {
        self.graph
            .display_name(key)
            .unwrap_or(key)
            .to_string()
    }

    fn display_path(&self, keys: &[String]) -> Vec<String> {
        keys.iter().map(|k| self.display(k)).collect()
    }
}
