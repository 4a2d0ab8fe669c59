pub mod geocoding;
pub mod weather;

// Re-export commonly used types
pub use geocoding::{CoordinateValue, Coordinates, GeocodeCandidate};
pub use weather::{ForecastPayload, HealthResponse, HourlyForecast, HourlySeries, WeatherResponse};
