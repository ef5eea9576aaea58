//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! Pricing knobs that operators may want to tune at deploy time are surfaced
//! through [`PricingConfig`](crate::config::PricingConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "5000";

// --- Path cache defaults ---

/// Default shortest-path cache TTL: 1 hour. Overridden by `ROUTE_CACHE_TTL`.
pub const DEFAULT_ROUTE_CACHE_TTL_SECONDS: u64 = 3_600;
/// Maximum entries kept by the in-memory path cache. Overridden by
/// `ROUTE_CACHE_MAX_ENTRIES`.
pub const DEFAULT_ROUTE_CACHE_MAX_ENTRIES: u64 = 1_000;

// --- Route computation ---

/// Label attached to every optimized route.
pub const ALGORITHM_LABEL: &str = "Dijkstra";

/// Distance reported for an unreachable destination.
pub const UNREACHABLE_DISTANCE_KM: f64 = f64::INFINITY;

// --- Average speeds per transport mode (km/h) ---

pub const CAR_SPEED_KMH: f64 = 60.0;
pub const TRAIN_SPEED_KMH: f64 = 80.0;
pub const BUS_SPEED_KMH: f64 = 50.0;
pub const WALK_SPEED_KMH: f64 = 5.0;

// --- Pricing defaults (USD, converted to INR for display) ---

/// Exchange rate used for every monetary figure. Overridden by `USD_TO_INR`.
pub const DEFAULT_USD_TO_INR: f64 = 83.0;
/// Fuel cost per kilometre driven. Overridden by `FUEL_PRICE_PER_KM_USD`.
pub const DEFAULT_FUEL_PRICE_PER_KM_USD: f64 = 0.12;
/// One toll plaza is assumed every this many kilometres. Overridden by
/// `TOLL_INTERVAL_KM`.
pub const DEFAULT_TOLL_INTERVAL_KM: f64 = 50.0;
/// Average charge per toll plaza. Overridden by `TOLL_CHARGE_USD`.
pub const DEFAULT_TOLL_CHARGE_USD: f64 = 2.0;
