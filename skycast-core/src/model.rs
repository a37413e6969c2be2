use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Primary condition category reported by the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Fog,
    Haze,
    /// Anything the classifier reports outside the known set.
    Other,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "clear",
            Condition::Clouds => "clouds",
            Condition::Rain => "rain",
            Condition::Drizzle => "drizzle",
            Condition::Thunderstorm => "thunderstorm",
            Condition::Snow => "snow",
            Condition::Mist => "mist",
            Condition::Fog => "fog",
            Condition::Haze => "haze",
            Condition::Other => "other",
        }
    }

    pub const fn all() -> &'static [Condition] {
        &[
            Condition::Clear,
            Condition::Clouds,
            Condition::Rain,
            Condition::Drizzle,
            Condition::Thunderstorm,
            Condition::Snow,
            Condition::Mist,
            Condition::Fog,
            Condition::Haze,
        ]
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "clear" => Condition::Clear,
            "clouds" => Condition::Clouds,
            "rain" => Condition::Rain,
            "drizzle" => Condition::Drizzle,
            "thunderstorm" => Condition::Thunderstorm,
            "snow" => Condition::Snow,
            "mist" => Condition::Mist,
            "fog" => Condition::Fog,
            "haze" => Condition::Haze,
            _ => Condition::Other,
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single point-in-time reading for one location.
///
/// Replaced wholesale on every successful fetch; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub condition: Condition,
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    /// Observation time, Unix seconds (UTC).
    pub observed_at: i64,
    pub sunrise: i64,
    pub sunset: i64,
    /// Location's UTC offset in seconds.
    pub timezone_offset_secs: i32,
}

/// One future day's midday reading, selected from the 3-hour samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Sample time, Unix seconds (UTC).
    pub forecast_at: i64,
    pub condition: Condition,
    pub description: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
}

/// What one complete fetch sequence produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub snapshot: WeatherSnapshot,
    pub forecast: Vec<ForecastEntry>,
}

/// Wall-clock time at the location's UTC offset.
///
/// Every local hour, day boundary, or formatted time in the crate goes
/// through here; nothing else mixes offsets into timestamps.
pub fn local_time(unix_secs: i64, offset_secs: i32) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(offset_secs)?;
    DateTime::from_timestamp(unix_secs, 0).map(|utc| utc.with_timezone(&offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn condition_as_str_roundtrip() {
        for condition in Condition::all() {
            let parsed = Condition::from(condition.as_str());
            assert_eq!(*condition, parsed);
        }
    }

    #[test]
    fn condition_parse_is_case_insensitive() {
        assert_eq!(Condition::from("RAIN"), Condition::Rain);
        assert_eq!(Condition::from("Clear"), Condition::Clear);
        assert_eq!(Condition::from("tHuNdErStOrM"), Condition::Thunderstorm);
    }

    #[test]
    fn unknown_condition_maps_to_other() {
        assert_eq!(Condition::from("tornado"), Condition::Other);
        assert_eq!(Condition::from(""), Condition::Other);
    }

    #[test]
    fn local_time_applies_offset() {
        // 2024-06-01 12:00:00 UTC
        let ts = 1_717_243_200;
        let local = local_time(ts, 3 * 3600).expect("valid offset");
        assert_eq!(local.hour(), 15);

        let local = local_time(ts, -4 * 3600).expect("valid offset");
        assert_eq!(local.hour(), 8);
    }

    #[test]
    fn local_time_rejects_absurd_offset() {
        assert!(local_time(0, 24 * 3600 + 1).is_none());
    }
}
