mod weather;

use axum::Json;
use chrono::Utc;

use crate::models::HealthResponse;

pub use weather::{get_weather, location_param, QueryPairs};

/// Liveness only; never touches the upstream services
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
