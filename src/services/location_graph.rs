//! Static road network of named locations.
//!
//! Locations live in an arena indexed by [`NodeId`]. Each node owns its
//! outgoing edges in declaration order, so iteration order (and therefore
//! Dijkstra tie-breaking) is reproducible. Lookups go through [`normalize`],
//! which makes them insensitive to case and surrounding whitespace, while the
//! first spelling seen for a location is kept for display.
//!
//! Edges are directed. A two-way road is two declarations; [`LocationGraph::add_road`]
//! is a shorthand for that. Symmetry is a property of the data, not something
//! the graph enforces.

use crate::models::Coordinates;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Invalid distance {km} km for edge {from} -> {to}: must be finite and non-negative")]
    InvalidWeight { from: String, to: String, km: f64 },

    #[error("Invalid position for {name}: {reason}")]
    InvalidPosition { name: String, reason: String },
}

/// Index of a location in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub to: NodeId,
    pub distance_km: f64,
}

#[derive(Debug, Clone)]
struct Location {
    key: String,
    display_name: String,
    coordinates: Option<Coordinates>,
    edges: Vec<Edge>,
}

/// Lookup key for a location name: trimmed and lower-cased.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[derive(Debug, Clone, Default)]
pub struct LocationGraph {
    nodes: Vec<Location>,
    index: HashMap<String, NodeId>,
}

impl LocationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `name`, creating it on first sight.
    pub fn add_location(&mut self, name: &str) -> NodeId {
        let key = normalize(name);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Location {
            key: key.clone(),
            display_name: name.trim().to_string(),
            coordinates: None,
            edges: Vec::new(),
        });
        self.index.insert(key, id);
        id
    }

    /// Pin a location to a latitude/longitude, adding it if unknown.
    pub fn set_coordinates(&mut self, name: &str, lat: f64, lng: f64) -> Result<(), GraphError> {
        let coordinates =
            Coordinates::new(lat, lng).map_err(|reason| GraphError::InvalidPosition {
                name: name.to_string(),
                reason,
            })?;
        let id = self.add_location(name);
        self.nodes[id.index()].coordinates = Some(coordinates);
        Ok(())
    }

    /// Declare a directed edge. Re-declaring an existing edge replaces its
    /// distance without changing its position in the neighbor order.
    pub fn add_edge(&mut self, from: &str, to: &str, distance_km: f64) -> Result<(), GraphError> {
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                km: distance_km,
            });
        }

        let from_id = self.add_location(from);
        let to_id = self.add_location(to);

        let edges = &mut self.nodes[from_id.index()].edges;
        match edges.iter_mut().find(|e| e.to == to_id) {
            Some(edge) => edge.distance_km = distance_km,
            None => edges.push(Edge {
                to: to_id,
                distance_km,
            }),
        }
        Ok(())
    }

    /// Declare a two-way road with the same distance in both directions.
    pub fn add_road(&mut self, a: &str, b: &str, distance_km: f64) -> Result<(), GraphError> {
        self.add_edge(a, b, distance_km)?;
        self.add_edge(b, a, distance_km)
    }

    pub fn node_id(&self, key: &str) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn key(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].key
    }

    pub fn edges(&self, id: NodeId) -> &[Edge] {
        &self.nodes[id.index()].edges
    }

    /// Neighbors of a normalized key with their distances. Empty for an
    /// unknown key; existence checks belong to the caller.
    pub fn neighbors<'a>(&'a self, key: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.node_id(key)
            .map(|id| self.edges(id))
            .unwrap_or_default()
            .iter()
            .map(move |e| (self.key(e.to), e.distance_km))
    }

    pub fn display_name(&self, key: &str) -> Option<&str> {
        self.node_id(key)
            .map(|id| self.nodes[id.index()].display_name.as_str())
    }

    pub fn coordinates(&self, key: &str) -> Option<Coordinates> {
        self.node_id(key)
            .and_then(|id| self.nodes[id.index()].coordinates)
    }

    /// Display names of every location, in insertion order.
    pub fn locations(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.display_name.clone()).collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// The fixed network the planner ships with: hill stations and cities
    /// around Coimbatore, distances in km. Roads are declared both ways except
    /// Mysore -> Ooty, which is one-way in the source data.
    pub fn standard_network() -> Result<Self, GraphError> {
        const ADJACENCY: &[(&str, &[(&str, f64)])] = &[
            (
                "Coimbatore",
                &[
                    ("Metupalayam", 38.0),
                    ("Ooty", 86.0),
                    ("Palani", 115.0),
                    ("Tiruppur", 47.0),
                ],
            ),
            (
                "Metupalayam",
                &[("Coimbatore", 38.0), ("Ooty", 48.0), ("Kotagiri", 42.0)],
            ),
            (
                "Ooty",
                &[
                    ("Coimbatore", 86.0),
                    ("Metupalayam", 48.0),
                    ("Kotagiri", 32.0),
                    ("Coonoor", 18.0),
                ],
            ),
            (
                "Kotagiri",
                &[("Metupalayam", 42.0), ("Ooty", 32.0), ("Coonoor", 12.0)],
            ),
            ("Coonoor", &[("Ooty", 18.0), ("Kotagiri", 12.0)]),
            ("Palani", &[("Coimbatore", 115.0), ("Dindigul", 65.0)]),
            ("Dindigul", &[("Palani", 65.0), ("Madurai", 65.0)]),
            ("Madurai", &[("Dindigul", 65.0), ("Tirunelveli", 160.0)]),
            ("Tiruppur", &[("Coimbatore", 47.0), ("Erode", 52.0)]),
            ("Erode", &[("Tiruppur", 52.0), ("Salem", 100.0)]),
            ("Salem", &[("Erode", 100.0), ("Bangalore", 200.0)]),
            ("Bangalore", &[("Salem", 200.0), ("Mysore", 145.0)]),
            ("Mysore", &[("Bangalore", 145.0), ("Ooty", 150.0)]),
            ("Tirunelveli", &[("Madurai", 160.0)]),
        ];

        const COORDINATES: &[(&str, f64, f64)] = &[
            ("Coimbatore", 11.0168, 76.9558),
            ("Metupalayam", 11.2995, 76.9388),
            ("Ooty", 11.4102, 76.6950),
            ("Kotagiri", 11.4216, 76.8616),
            ("Coonoor", 11.3530, 76.7959),
            ("Palani", 10.4500, 77.5200),
            ("Dindigul", 10.3624, 77.9695),
            ("Madurai", 9.9252, 78.1198),
            ("Tiruppur", 11.1085, 77.3411),
            ("Erode", 11.3410, 77.7172),
            ("Salem", 11.6643, 78.1460),
            ("Bangalore", 12.9716, 77.5946),
            ("Mysore", 12.2958, 76.6394),
            ("Tirunelveli", 8.7139, 77.7567),
        ];

        let mut graph = LocationGraph::new();
        for (from, neighbors) in ADJACENCY {
            graph.add_location(from);
            for (to, km) in neighbors.iter() {
                graph.add_edge(from, to, *km)?;
            }
        }
        for (name, lat, lng) in COORDINATES {
            graph.set_coordinates(name, *lat, *lng)?;
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Built standard location graph"
        );
        Ok(graph)
    }
}
