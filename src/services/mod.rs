pub mod currency;
pub mod location_graph;
pub mod route_metrics;
pub mod route_optimizer;
pub mod shortest_path;
