pub mod geocoding;
pub mod open_meteo;
pub mod weather_report;

pub use geocoding::GeocodingService;
pub use open_meteo::ForecastService;
pub use weather_report::WeatherReportService;
