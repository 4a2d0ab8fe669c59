use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::error::Error;

/// Every way a `/weather` request can fail, as seen by the caller
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location parameter is required")]
    MissingLocation,

    #[error("Location not found")]
    LocationNotFound,

    /// Either upstream call failed at the network, status or parse level.
    /// A non-2xx answer lands here even when its body is JSON, so an
    /// Open-Meteo `{"error": true, "reason": ...}` is a 503 and never an
    /// empty 200 forecast.
    #[error("Failed to fetch weather data: {0}")]
    Upstream(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl WeatherError {
    pub fn internal(details: impl std::fmt::Display) -> Self {
        Self::Internal(details.to_string())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::MissingLocation => StatusCode::BAD_REQUEST,
            WeatherError::LocationNotFound => StatusCode::NOT_FOUND,
            WeatherError::Upstream(_) => StatusCode::SERVICE_UNAVAILABLE,
            WeatherError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            WeatherError::MissingLocation => ErrorBody {
                error: "Location parameter is required",
                details: None,
            },
            WeatherError::LocationNotFound => ErrorBody {
                error: "Location not found",
                details: None,
            },
            WeatherError::Upstream(details) => ErrorBody {
                error: "Failed to fetch weather data",
                details: Some(details.clone()),
            },
            WeatherError::Internal(details) => ErrorBody {
                error: "Internal server error",
                details: Some(details.clone()),
            },
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        // Walk the source chain so the caller sees e.g. "connection refused"
        // rather than only "error sending request"
        let mut details = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            details.push_str(&format!(": {}", cause));
            source = cause.source();
        }
        WeatherError::Upstream(details)
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(WeatherError::MissingLocation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(WeatherError::LocationNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            WeatherError::Upstream("timed out".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            WeatherError::internal("bad latitude").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_errors_have_no_details() {
        let body = serde_json::to_value(WeatherError::MissingLocation.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Location parameter is required" }));

        let body = serde_json::to_value(WeatherError::LocationNotFound.body()).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Location not found" }));
    }

    #[test]
    fn test_server_errors_carry_details() {
        let body = serde_json::to_value(WeatherError::Upstream("connection refused".into()).body())
            .unwrap();
        assert_eq!(body["error"], "Failed to fetch weather data");
        assert_eq!(body["details"], "connection refused");

        let body = serde_json::to_value(WeatherError::internal("latitude out of range").body())
            .unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["details"], "latitude out of range");
    }
}
