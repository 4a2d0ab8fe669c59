use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Nominatim search endpoint used to resolve place names
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,

    // Open-Meteo forecast endpoint
    #[serde(default = "default_weather_url")]
    pub weather_url: String,

    // Sent as User-Agent on every geocoding request. Nominatim's usage
    // policy rejects anonymous clients, so this must never be empty.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // Unset keeps the HTTP client's own default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration from environment: {0}")]
    Env(#[from] envy::Error),

    #[error("USER_AGENT must not be empty")]
    EmptyUserAgent,

    #[error("{name} must be an http(s) URL, got '{value}'")]
    InvalidUrl { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = envy::from_env::<Config>()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would only fail later, on the first request
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }

        for (name, value) in [
            ("GEOCODING_URL", &self.geocoding_url),
            ("WEATHER_URL", &self.weather_url),
        ] {
            if !value.starts_with("http://") && !value.starts_with("https://") {
                return Err(ConfigError::InvalidUrl {
                    name,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            geocoding_url: default_geocoding_url(),
            weather_url: default_weather_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: None,
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_geocoding_url() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_user_agent() -> String {
    "WeatherService/1.0".to_string()
}
