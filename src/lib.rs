// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use cache::PathCache;
use services::route_optimizer::RouteOptimizer;
use std::sync::Arc;

// App state for sharing across the application
pub struct AppState {
    pub optimizer: RouteOptimizer,
    pub cache: Option<Arc<dyn PathCache>>,
}
