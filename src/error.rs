use crate::services::shortest_path::PathError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Route not found: {0}")]
    RouteNotFound(PathError),

    #[error("Route data not found: {0}")]
    RouteDataNotFound(PathError),

    #[error("Time formatting error: {0}")]
    TimeFormat(#[from] time::error::Format),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingInput(_) | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound(_) | AppError::RouteDataNotFound(_) => StatusCode::NOT_FOUND,
            AppError::TimeFormat(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Convert AppError into HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::MissingInput(ref e) | AppError::InvalidRequest(ref e) => {
                tracing::debug!("Rejected request: {}", e);
                json!({ "success": false, "message": e })
            }
            AppError::RouteNotFound(ref reason) => {
                tracing::info!(reason = %reason, "Route optimization found no route");
                json!({
                    "success": false,
                    "message": reason.user_message(),
                    "optimizedRoute": null,
                })
            }
            AppError::RouteDataNotFound(ref reason) => {
                tracing::info!(reason = %reason, "Route data lookup found no route");
                json!({
                    "success": false,
                    "message": reason.user_message(),
                    "route": null,
                })
            }
            AppError::TimeFormat(ref e) => {
                tracing::error!("Time formatting error: {}", e);
                json!({ "success": false, "message": "Internal server error" })
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
