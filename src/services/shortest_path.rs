//! Dijkstra shortest path over a [`LocationGraph`].
//!
//! The graphs served here have tens of nodes, so the frontier is a plain
//! linear scan over the distance vector (O(V²)) rather than a heap. Scanning
//! in `NodeId` order with a strict `<` makes tie-breaking deterministic: among
//! equally distant candidates the earliest-inserted location is settled first.

use crate::constants::UNREACHABLE_DISTANCE_KM;
use crate::services::location_graph::{LocationGraph, NodeId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Source location \"{0}\" not found in route network")]
    UnknownSource(String),

    #[error("Destination location \"{0}\" not found in route network")]
    UnknownDestination(String),

    #[error("No route found between \"{from}\" and \"{to}\"")]
    NoRoute { from: String, to: String },
}

impl PathError {
    /// Message shown to API callers. Unknown endpoints collapse into one
    /// message; the variant itself is logged for diagnosis.
    pub fn user_message(&self) -> &'static str {
        match self {
            PathError::UnknownSource(_) | PathError::UnknownDestination(_) => {
                "Location not found in route network"
            }
            PathError::NoRoute { .. } => "No route found between source and destination",
        }
    }
}

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Total distance in km, or [`UNREACHABLE_DISTANCE_KM`] when not found
    pub distance: f64,
    /// Normalized keys from source to destination inclusive
    pub path: Vec<String>,
    pub found: bool,
    pub error: Option<PathError>,
}

impl PathResult {
    fn found(distance: f64, path: Vec<String>) -> Self {
        PathResult {
            distance,
            path,
            found: true,
            error: None,
        }
    }

    fn unreachable(error: PathError) -> Self {
        PathResult {
            distance: UNREACHABLE_DISTANCE_KM,
            path: Vec::new(),
            found: false,
            error: Some(error),
        }
    }

    pub fn into_result(self) -> Result<Self, PathError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self),
        }
    }
}

/// Shortest path between two pre-normalized keys.
pub fn find_shortest_path(graph: &LocationGraph, source: &str, destination: &str) -> PathResult {
    let Some(start) = graph.node_id(source) else {
        return PathResult::unreachable(PathError::UnknownSource(source.to_string()));
    };
    let Some(end) = graph.node_id(destination) else {
        return PathResult::unreachable(PathError::UnknownDestination(destination.to_string()));
    };

    if start == end {
        return PathResult::found(0.0, vec![source.to_string()]);
    }

    let n = graph.node_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut visited = vec![false; n];
    let mut previous: Vec<Option<NodeId>> = vec![None; n];

    dist[start.index()] = 0.0;

    while let Some(current) = closest_unvisited(&dist, &visited) {
        if current == end {
            break;
        }
        visited[current.index()] = true;

        for edge in graph.edges(current) {
            let next = edge.to.index();
            if visited[next] {
                continue;
            }
            let candidate = dist[current.index()] + edge.distance_km;
            if candidate < dist[next] {
                dist[next] = candidate;
                previous[next] = Some(current);
            }
        }
    }

    if dist[end.index()].is_infinite() {
        return PathResult::unreachable(PathError::NoRoute {
            from: source.to_string(),
            to: destination.to_string(),
        });
    }

    PathResult::found(dist[end.index()], reconstruct(graph, &previous, end))
}

/// Unvisited node with the smallest finite tentative distance.
fn closest_unvisited(dist: &[f64], visited: &[bool]) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for (i, &d) in dist.iter().enumerate() {
        if visited[i] || d.is_infinite() {
            continue;
        }
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((NodeId(i), d)),
        }
    }
    best.map(|(id, _)| id)
}

fn reconstruct(graph: &LocationGraph, previous: &[Option<NodeId>], end: NodeId) -> Vec<String> {
    let mut path = vec![graph.key(end).to_string()];
    let mut cur = end;
    while let Some(prev) = previous[cur.index()] {
        path.push(graph.key(prev).to_string());
        cur = prev;
    }
    path.reverse();
    path
}
