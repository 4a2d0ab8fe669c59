use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{error, info, warn};

use crate::{error::WeatherError, models::WeatherResponse, AppState};

/// Raw query pairs in request order, so repeated keys survive extraction
pub type QueryPairs = Vec<(String, String)>;

/// First `location` value of the query string. Later duplicates are ignored
/// and an empty first value counts as missing.
pub fn location_param(pairs: &[(String, String)]) -> Option<&str> {
    pairs
        .iter()
        .find(|(key, _)| key == "location")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty())
}

/// Current conditions plus a 24 hour forecast for a free-text place name
pub async fn get_weather(
    State(state): State<AppState>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<WeatherResponse>, WeatherError> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            warn!("Unreadable query string: {}", rejection);
            return Err(WeatherError::MissingLocation);
        }
    };

    let location = location_param(&pairs)
        .ok_or(WeatherError::MissingLocation)?
        .to_string();

    match state.weather.report(&location).await {
        Ok(response) => {
            info!("Successfully retrieved weather data for {}", location);
            Ok(Json(response))
        }
        Err(e) => {
            match &e {
                WeatherError::Upstream(details) => {
                    error!("Error fetching weather data: {}", details)
                }
                WeatherError::Internal(details) => error!("Unexpected error: {}", details),
                WeatherError::LocationNotFound => info!("No geocoding match for {}", location),
                WeatherError::MissingLocation => {}
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_location_wins() {
        let query = pairs(&[("location", "Paris"), ("location", "Lyon")]);
        assert_eq!(location_param(&query), Some("Paris"));
    }

    #[test]
    fn test_other_keys_ignored() {
        let query = pairs(&[("units", "metric"), ("location", "Oslo")]);
        assert_eq!(location_param(&query), Some("Oslo"));
    }

    #[test]
    fn test_missing_or_empty_location() {
        assert_eq!(location_param(&[]), None);
        assert_eq!(location_param(&pairs(&[("units", "metric")])), None);
        assert_eq!(location_param(&pairs(&[("location", ""), ("location", "Lyon")])), None);
    }
}
