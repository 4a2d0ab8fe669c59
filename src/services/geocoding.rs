use reqwest::Client;
use serde_json::Value;

use crate::error::WeatherError;
use crate::models::GeocodeCandidate;

/// Free-text place search against a Nominatim-compatible endpoint
#[derive(Debug, Clone)]
pub struct GeocodingService {
    client: Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Search for `query` and return the matches in Nominatim's ranking order.
    ///
    /// Network errors, non-success statuses and non-JSON bodies are
    /// `Upstream`; JSON that is not a list of matches is `Internal`.
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodeCandidate>, WeatherError> {
        tracing::debug!("Geocoding '{}' via {}", query, self.base_url);

        let body: Value = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if is_blank(&body) {
            tracing::debug!("Geocoding '{}' returned an empty document", query);
            return Ok(Vec::new());
        }

        let candidates: Vec<GeocodeCandidate> = serde_json::from_value(body)
            .map_err(|e| WeatherError::internal(format!("Unexpected geocoding response: {}", e)))?;

        tracing::debug!("Geocoding '{}' returned {} matches", query, candidates.len());
        Ok(candidates)
    }
}

/// `null`, `{}`, `[]`, `""` and `false` all mean "no matches"
fn is_blank(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        Value::Number(_) => false,
    }
}
