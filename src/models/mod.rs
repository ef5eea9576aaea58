pub mod coordinates;
pub mod route;

pub use coordinates::Coordinates;
pub use route::{OptimizedRoute, RouteData, TransportMode, Waypoint};
