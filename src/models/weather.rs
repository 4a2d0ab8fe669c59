use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::geocoding::Coordinates;

/// Open-Meteo forecast payload, reduced to the fields this service reads.
/// Anything missing falls back to an empty mapping or sequence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub current_weather: Option<Map<String, Value>>,
    #[serde(default)]
    pub hourly: Option<HourlySeries>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HourlySeries {
    // Open-Meteo emits null for hours it has no value for
    #[serde(default)]
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyForecast {
    pub temperature: Vec<Option<f64>>,
    pub precipitation_probability: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherResponse {
    pub location: String,
    pub coordinates: Coordinates,
    pub current_weather: Map<String, Value>,
    pub hourly_forecast: HourlyForecast,
    /// When this response was assembled (RFC 3339, UTC)
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}
