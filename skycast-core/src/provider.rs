use crate::{
    Config,
    config::API_KEY_ENV,
    error::FetchError,
    model::{ForecastEntry, WeatherSnapshot},
};
use anyhow::anyhow;
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// Raw multi-day forecast: chronological 3-hour samples plus the location's
/// UTC offset, before daily reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub timezone_offset_secs: i32,
    pub samples: Vec<ForecastEntry>,
}

/// Seam between the orchestrator and the upstream weather service.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;

    async fn forecast(&self, city: &str) -> Result<Forecast, FetchError>;
}

/// Construct the provider from config, resolving the API key.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let api_key = config.resolve_api_key().ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: run `skycast configure` and enter your OpenWeather API key, \
             or set {API_KEY_ENV}."
        )
    })?;

    Ok(Arc::new(OpenWeatherProvider::new(api_key)))
}
