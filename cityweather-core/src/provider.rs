use crate::{Config, WeatherReport, config::ApiKey, error::LookupError};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Source of current conditions for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Exactly one request per call; no retry.
    async fn current_weather(&self, city: &str, api_key: &ApiKey) -> Result<WeatherReport, LookupError>;
}

/// Construct the OpenWeather provider from config (endpoint and timeout).
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    OpenWeatherProvider::new(config.base_url(), config.timeout())
}
