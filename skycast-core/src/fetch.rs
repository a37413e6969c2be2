//! Fetch orchestration: one city in, one `WeatherBundle` out.
//!
//! The sequence is all-or-nothing: a forecast failure discards the already
//! fetched current snapshot.

use chrono::Timelike;
use std::collections::HashSet;
use tracing::debug;

use crate::{
    error::FetchError,
    model::{ForecastEntry, WeatherBundle, local_time},
    provider::WeatherProvider,
};

/// Number of forecast days shown to the user.
pub const FORECAST_DAYS: usize = 5;

/// Local hours (inclusive) a sample must fall in to represent its day.
const MIDDAY_START: u32 = 12;
const MIDDAY_END: u32 = 15;

/// Run the two-call sequence against the provider and reduce the result.
///
/// An empty or whitespace-only city fails with [`FetchError::EmptyQuery`]
/// before any request is made.
pub async fn fetch_weather(
    provider: &dyn WeatherProvider,
    city: &str,
) -> Result<WeatherBundle, FetchError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(FetchError::EmptyQuery);
    }

    debug!(city, "fetching current conditions");
    let snapshot = provider.current(city).await?;

    debug!(city, "fetching multi-day forecast");
    let forecast = provider.forecast(city).await?;

    let daily = reduce_daily(forecast.samples, forecast.timezone_offset_secs);
    debug!(city, days = daily.len(), "forecast reduced");

    Ok(WeatherBundle {
        snapshot,
        forecast: daily,
    })
}

/// Collapse chronological 3-hour samples to at most one midday entry per
/// local calendar day, capped at [`FORECAST_DAYS`].
pub fn reduce_daily(samples: Vec<ForecastEntry>, timezone_offset_secs: i32) -> Vec<ForecastEntry> {
    let mut seen_days = HashSet::new();
    let mut daily = Vec::new();

    for sample in samples {
        if daily.len() == FORECAST_DAYS {
            break;
        }

        let Some(local) = local_time(sample.forecast_at, timezone_offset_secs) else {
            continue;
        };

        if !(MIDDAY_START..=MIDDAY_END).contains(&local.hour()) {
            continue;
        }

        if seen_days.insert(local.date_naive()) {
            daily.push(sample);
        }
    }

    daily
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{Condition, WeatherSnapshot},
        provider::Forecast,
    };
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ts(day: u32, hour: u32, minute: u32) -> i64 {
        Utc.with_ymd_and_hms(2024, 6, day, hour, minute, 0)
            .unwrap()
            .timestamp()
    }

    fn sample(dt: i64) -> ForecastEntry {
        ForecastEntry {
            forecast_at: dt,
            condition: Condition::Clear,
            description: "clear sky".into(),
            temperature_c: 20.0,
            feels_like_c: 19.0,
            humidity_pct: 50,
            wind_speed_mps: 2.0,
            pressure_hpa: 1012,
        }
    }

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Thimphu".into(),
            condition: Condition::Clear,
            description: "clear sky".into(),
            temperature_c: 18.0,
            feels_like_c: 17.5,
            humidity_pct: 60,
            wind_speed_mps: 1.5,
            pressure_hpa: 1013,
            observed_at: ts(1, 6, 0),
            sunrise: ts(1, 0, 0),
            sunset: ts(1, 13, 0),
            timezone_offset_secs: 0,
        }
    }

    #[derive(Debug, Default)]
    struct MockProvider {
        current_calls: AtomicUsize,
        forecast_calls: AtomicUsize,
        city_missing: bool,
        forecast_down: bool,
        samples: Vec<ForecastEntry>,
    }

    #[async_trait]
    impl WeatherProvider for MockProvider {
        async fn current(&self, _city: &str) -> Result<WeatherSnapshot, FetchError> {
            self.current_calls.fetch_add(1, Ordering::SeqCst);
            if self.city_missing {
                return Err(FetchError::CityNotFound);
            }
            Ok(snapshot())
        }

        async fn forecast(&self, _city: &str) -> Result<Forecast, FetchError> {
            self.forecast_calls.fetch_add(1, Ordering::SeqCst);
            if self.forecast_down {
                return Err(FetchError::ForecastUnavailable(anyhow!("status 502")));
            }
            Ok(Forecast {
                timezone_offset_secs: 0,
                samples: self.samples.clone(),
            })
        }
    }

    #[tokio::test]
    async fn empty_query_makes_no_calls() {
        let provider = MockProvider::default();

        let err = fetch_weather(&provider, "   ").await.unwrap_err();

        assert!(matches!(err, FetchError::EmptyQuery));
        assert_eq!(provider.current_calls.load(Ordering::SeqCst), 0);
        assert_eq!(provider.forecast_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_city_skips_forecast_call() {
        let provider = MockProvider {
            city_missing: true,
            ..Default::default()
        };

        let err = fetch_weather(&provider, "Atlantis").await.unwrap_err();

        assert_eq!(err.to_string(), "City not found. Please check spelling.");
        assert_eq!(provider.current_calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.forecast_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn forecast_failure_discards_the_snapshot() {
        let provider = MockProvider {
            forecast_down: true,
            ..Default::default()
        };

        let err = fetch_weather(&provider, "Thimphu").await.unwrap_err();

        assert_eq!(err.to_string(), "Unable to fetch forecast data.");
        assert_eq!(provider.current_calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.forecast_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn successful_sequence_returns_reduced_bundle() {
        let provider = MockProvider {
            samples: (1..=7).map(|day| sample(ts(day, 12, 0))).collect(),
            ..Default::default()
        };

        let bundle = fetch_weather(&provider, " Thimphu ").await.expect("bundle");

        assert_eq!(bundle.snapshot.location_name, "Thimphu");
        assert_eq!(bundle.forecast.len(), FORECAST_DAYS);
    }

    #[test]
    fn midday_window_is_inclusive() {
        let samples = vec![
            sample(ts(1, 11, 59)),
            sample(ts(2, 12, 0)),
            sample(ts(3, 15, 0)),
            sample(ts(4, 16, 0)),
        ];

        let daily = reduce_daily(samples, 0);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].forecast_at, ts(2, 12, 0));
        assert_eq!(daily[1].forecast_at, ts(3, 15, 0));
    }

    #[test]
    fn one_entry_per_day_keeps_the_first_qualifying_sample() {
        let samples = vec![
            sample(ts(1, 12, 0)),
            sample(ts(1, 15, 0)),
            sample(ts(2, 13, 0)),
        ];

        let daily = reduce_daily(samples, 0);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].forecast_at, ts(1, 12, 0));
        assert_eq!(daily[1].forecast_at, ts(2, 13, 0));
    }

    #[test]
    fn capped_at_five_days_in_chronological_order() {
        let samples: Vec<_> = (1..=8).map(|day| sample(ts(day, 13, 0))).collect();

        let daily = reduce_daily(samples, 0);

        assert_eq!(daily.len(), FORECAST_DAYS);
        for pair in daily.windows(2) {
            assert!(pair[0].forecast_at < pair[1].forecast_at);
        }
        assert_eq!(daily[0].forecast_at, ts(1, 13, 0));
        assert_eq!(daily[4].forecast_at, ts(5, 13, 0));
    }

    #[test]
    fn hour_window_uses_location_local_time() {
        // 09:30 UTC at +03:00 is 12:30 local; 13:30 UTC at +03:00 is 16:30.
        let samples = vec![sample(ts(1, 9, 30)), sample(ts(2, 13, 30))];

        let daily = reduce_daily(samples, 3 * 3600);

        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].forecast_at, ts(1, 9, 30));
    }

    #[test]
    fn offset_can_move_a_sample_to_the_next_local_day() {
        // Both samples are midday at +12:00, but they land on the same
        // local day only if the offset is ignored.
        let first = ts(1, 0, 30); // 12:30 local, June 1
        let second = ts(1, 23, 30); // 11:30 local, June 2 - outside the window
        let third = ts(2, 1, 0); // 13:00 local, June 2

        let daily = reduce_daily(vec![sample(first), sample(second), sample(third)], 12 * 3600);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].forecast_at, first);
        assert_eq!(daily[1].forecast_at, third);
    }
}
