use chrono::Utc;

use crate::error::WeatherError;
use crate::models::{Coordinates, ForecastPayload, GeocodeCandidate, HourlyForecast, WeatherResponse};

/// Number of hourly entries kept from each upstream series
pub const FORECAST_WINDOW_HOURS: usize = 24;

/// Take the coordinates of the best (first) geocoding match.
///
/// An empty match list is `LocationNotFound`. A match whose latitude or
/// longitude is missing, unparseable or out of range is treated as an
/// unexpected upstream shape and reported as `Internal`.
pub fn first_coordinates(candidates: &[GeocodeCandidate]) -> Result<Coordinates, WeatherError> {
    let best = candidates.first().ok_or(WeatherError::LocationNotFound)?;

    let latitude = best
        .lat
        .as_ref()
        .ok_or_else(|| WeatherError::internal("geocoding result has no 'lat' field"))?
        .to_f64()
        .map_err(WeatherError::internal)?;
    let longitude = best
        .lon
        .as_ref()
        .ok_or_else(|| WeatherError::internal("geocoding result has no 'lon' field"))?
        .to_f64()
        .map_err(WeatherError::internal)?;

    let coordinates = Coordinates::new(latitude, longitude);
    if !coordinates.is_valid() {
        return Err(WeatherError::internal(format!(
            "coordinates out of range: latitude {}, longitude {}",
            latitude, longitude
        )));
    }

    Ok(coordinates)
}

fn window<T: Clone>(series: &[T]) -> Vec<T> {
    series.iter().take(FORECAST_WINDOW_HOURS).cloned().collect()
}

/// Merge the caller's query, the resolved coordinates and the forecast
/// payload into the response body, stamped with the current time.
pub fn build_response(
    location: &str,
    coordinates: Coordinates,
    payload: ForecastPayload,
) -> WeatherResponse {
    let hourly = payload.hourly.unwrap_or_default();

    WeatherResponse {
        location: location.to_string(),
        coordinates,
        current_weather: payload.current_weather.unwrap_or_default(),
        hourly_forecast: HourlyForecast {
            temperature: window(&hourly.temperature_2m),
            precipitation_probability: window(&hourly.precipitation_probability),
        },
        timestamp: Utc::now().to_rfc3339(),
    }
}
