use serde::{Deserialize, Serialize};

/// One Nominatim search match. Nominatim sends coordinates as strings,
/// other geocoders send plain numbers, so both forms are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeCandidate {
    #[serde(default)]
    pub lat: Option<CoordinateValue>,
    #[serde(default)]
    pub lon: Option<CoordinateValue>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CoordinateValue {
    Number(f64),
    Text(String),
}

impl CoordinateValue {
    pub fn to_f64(&self) -> Result<f64, String> {
        match self {
            CoordinateValue::Number(value) => Ok(*value),
            CoordinateValue::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("could not convert '{}' to float: {}", text, e)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Finite and within [-90, 90] / [-180, 180]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominatim_string_coordinates() {
        let candidates: Vec<GeocodeCandidate> = serde_json::from_str(
            r#"[{"lat": "48.8588897", "lon": "2.3200410", "display_name": "Paris, France"}]"#,
        )
        .unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].lat.as_ref().unwrap().to_f64(), Ok(48.8588897));
        assert_eq!(candidates[0].lon.as_ref().unwrap().to_f64(), Ok(2.3200410));
        assert_eq!(candidates[0].display_name.as_deref(), Some("Paris, France"));
    }

    #[test]
    fn test_numeric_coordinates() {
        let candidate: GeocodeCandidate =
            serde_json::from_str(r#"{"lat": 51.5, "lon": -0.12}"#).unwrap();
        assert_eq!(candidate.lat, Some(CoordinateValue::Number(51.5)));
        assert_eq!(candidate.lon.unwrap().to_f64(), Ok(-0.12));
    }

    #[test]
    fn test_unparseable_text() {
        let value = CoordinateValue::Text("north-ish".to_string());
        assert!(value.to_f64().unwrap_err().contains("north-ish"));
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(Coordinates::new(90.0, -180.0).is_valid());
        assert!(!Coordinates::new(90.01, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, 180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, f64::INFINITY).is_valid());
    }
}
