use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{Condition, ForecastEntry, WeatherSnapshot},
    provider::Forecast,
};

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    /// Both endpoints take the same query parameters; the caller interprets
    /// the status according to its own failure taxonomy.
    async fn get(&self, url: &str, city: &str) -> anyhow::Result<(StatusCode, String)> {
        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {url}"))?;

        Ok((status, body))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        let (status, body) = self
            .get(CURRENT_URL, city)
            .await
            .map_err(FetchError::ServiceUnavailable)?;

        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::CityNotFound);
        }

        if !status.is_success() {
            return Err(FetchError::ServiceUnavailable(anyhow!(
                "OpenWeather current request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .context("Failed to parse OpenWeather current JSON")
            .map_err(FetchError::ServiceUnavailable)?;

        debug!(city, %status, "current conditions received");

        Ok(parsed.into())
    }

    async fn forecast(&self, city: &str) -> Result<Forecast, FetchError> {
        let (status, body) = self
            .get(FORECAST_URL, city)
            .await
            .map_err(FetchError::ForecastUnavailable)?;

        if !status.is_success() {
            return Err(FetchError::ForecastUnavailable(anyhow!(
                "OpenWeather forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)
            .context("Failed to parse OpenWeather forecast JSON")
            .map_err(FetchError::ForecastUnavailable)?;

        debug!(city, samples = parsed.list.len(), "forecast received");

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: i64,
    timezone: i32,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
    sys: OwSys,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct OwForecastSlot {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastSlot>,
}

fn primary_weather(entries: &[OwWeather]) -> (Condition, String) {
    entries
        .first()
        .map(|w| (Condition::from(w.main.as_str()), w.description.clone()))
        .unwrap_or_else(|| (Condition::Other, "Unknown".to_string()))
}

impl From<OwCurrentResponse> for WeatherSnapshot {
    fn from(raw: OwCurrentResponse) -> Self {
        let (condition, description) = primary_weather(&raw.weather);

        WeatherSnapshot {
            location_name: raw.name,
            condition,
            description,
            temperature_c: raw.main.temp,
            feels_like_c: raw.main.feels_like,
            humidity_pct: raw.main.humidity,
            wind_speed_mps: raw.wind.speed,
            pressure_hpa: raw.main.pressure,
            observed_at: raw.dt,
            sunrise: raw.sys.sunrise,
            sunset: raw.sys.sunset,
            timezone_offset_secs: raw.timezone,
        }
    }
}

impl From<OwForecastResponse> for Forecast {
    fn from(raw: OwForecastResponse) -> Self {
        let samples = raw
            .list
            .into_iter()
            .map(|slot| {
                let (condition, description) = primary_weather(&slot.weather);

                ForecastEntry {
                    forecast_at: slot.dt,
                    condition,
                    description,
                    temperature_c: slot.main.temp,
                    feels_like_c: slot.main.feels_like,
                    humidity_pct: slot.main.humidity,
                    wind_speed_mps: slot.wind.speed,
                    pressure_hpa: slot.main.pressure,
                }
            })
            .collect();

        Forecast {
            timezone_offset_secs: raw.city.timezone,
            samples,
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
