pub mod forecast_window;
