use crate::constants::{BUS_SPEED_KMH, CAR_SPEED_KMH, TRAIN_SPEED_KMH, WALK_SPEED_KMH};
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Car,
    Train,
    Bus,
    Walk,
}

impl TransportMode {
    /// Average travel speed used for duration estimates
    pub fn average_speed_kmh(&self) -> f64 {
        match self {
            TransportMode::Car => CAR_SPEED_KMH,
            TransportMode::Train => TRAIN_SPEED_KMH,
            TransportMode::Bus => BUS_SPEED_KMH,
            TransportMode::Walk => WALK_SPEED_KMH,
        }
    }

    /// Parse a caller-supplied mode, falling back to car when the value is
    /// absent or unrecognized. The mode only affects derived metrics, so an
    /// unknown value is never an error.
    pub fn from_request(mode: Option<&str>) -> Self {
        match mode {
            None => TransportMode::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::debug!("{}; falling back to car", e);
                TransportMode::default()
            }),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportMode::Car => write!(f, "car"),
            TransportMode::Train => write!(f, "train"),
            TransportMode::Bus => write!(f, "bus"),
            TransportMode::Walk => write!(f, "walk"),
        }
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(TransportMode::Car),
            "train" => Ok(TransportMode::Train),
            "bus" => Ok(TransportMode::Bus),
            "walk" => Ok(TransportMode::Walk),
            _ => Err(format!("Invalid transport mode: '{}'", s)),
        }
    }
}

/// Result of a route optimization, in the shape the web client renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedRoute {
    /// Display distance, e.g. "86 km"
    pub distance: String,
    /// Display duration, e.g. "1h 26m"
    pub duration: String,
    pub eta: String,
    /// Whole rupees
    pub fuel_cost: u64,
    /// Whole rupees
    pub toll_cost: u64,
    pub fuel_cost_formatted: String,
    pub toll_cost_formatted: String,
    pub optimized_path: Vec<String>,
    pub algorithm: String,
    pub transport_mode: TransportMode,
    pub total_distance: f64,
}

/// Path geometry for map rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteData {
    pub coordinates: Vec<Coordinates>,
    pub waypoints: Vec<Waypoint>,
    pub path: Vec<String>,
    pub distance: f64,
    /// Haversine distance between the endpoints, when both are geolocated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub straight_line_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteRequest {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub transport_mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RouteDataRequest {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteResponse {
    pub success: bool,
    pub optimized_route: OptimizedRoute,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct RouteDataResponse {
    pub success: bool,
    pub route: RouteData,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub success: bool,
    pub locations: Vec<String>,
}
