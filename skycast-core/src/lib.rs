//! Core library for the `skycast` terminal weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the upstream weather service
//! - Shared domain models (conditions, snapshots, forecasts)
//! - The fetch orchestrator and its failure taxonomy
//! - Pure display reducers and the UI state container
//!
//! It is used by `skycast-tui`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod model;
pub mod provider;
pub mod state;

pub use config::Config;
pub use error::FetchError;
pub use fetch::fetch_weather;
pub use model::{Condition, ForecastEntry, WeatherBundle, WeatherSnapshot};
pub use provider::{Forecast, OpenWeatherProvider, WeatherProvider, provider_from_config};
pub use state::{Action, AppState, Effect, RequestId, reduce};
