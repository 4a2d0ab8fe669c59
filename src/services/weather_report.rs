use reqwest::Client;

use crate::config::Config;
use crate::error::WeatherError;
use crate::libraries::forecast_window::{build_response, first_coordinates};
use crate::models::WeatherResponse;

use super::geocoding::GeocodingService;
use super::open_meteo::ForecastService;

/// Geocode a place name, then fetch the forecast for its coordinates.
///
/// The two calls are strictly sequential and never retried: the first
/// failure is returned to the caller as-is.
#[derive(Debug, Clone)]
pub struct WeatherReportService {
    geocoding: GeocodingService,
    forecast: ForecastService,
}

impl WeatherReportService {
    pub fn new(geocoding: GeocodingService, forecast: ForecastService) -> Self {
        Self {
            geocoding,
            forecast,
        }
    }

    /// Build both upstream clients from configuration, sharing one
    /// connection pool that always identifies itself with the configured
    /// user agent.
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self::new(
            GeocodingService::new(client.clone(), config.geocoding_url.clone()),
            ForecastService::new(client, config.weather_url.clone()),
        ))
    }

    pub async fn report(&self, location: &str) -> Result<WeatherResponse, WeatherError> {
        let candidates = self.geocoding.search(location).await?;
        let coordinates = first_coordinates(&candidates)?;

        tracing::debug!(
            "Resolved '{}' to ({}, {})",
            location,
            coordinates.latitude,
            coordinates.longitude
        );

        let payload = self.forecast.forecast(coordinates).await?;
        Ok(build_response(location, coordinates, payload))
    }
}
