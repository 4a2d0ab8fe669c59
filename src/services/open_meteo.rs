use reqwest::Client;
use serde_json::Value;

use crate::error::WeatherError;
use crate::models::{Coordinates, ForecastPayload};

/// Hourly series requested alongside the current conditions
const HOURLY_VARIABLES: &str = "temperature_2m,precipitation_probability";

#[derive(Debug, Clone)]
pub struct ForecastService {
    client: Client,
    base_url: String,
}

impl ForecastService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub async fn forecast(&self, coordinates: Coordinates) -> Result<ForecastPayload, WeatherError> {
        tracing::debug!(
            "Requesting forecast for ({}, {})",
            coordinates.latitude,
            coordinates.longitude
        );

        let body: Value = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("hourly", HOURLY_VARIABLES.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        serde_json::from_value(body)
            .map_err(|e| WeatherError::internal(format!("Unexpected forecast response: {}", e)))
    }
}
