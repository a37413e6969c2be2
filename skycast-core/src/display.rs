//! Pure display reducers.
//!
//! Everything here is stateless and total: any condition, any timestamp,
//! any absence renders to something. The UI layer only formats, it never
//! decides.

use chrono::{Datelike, Weekday};

use crate::model::{Condition, local_time};

/// Rendered when a temperature is absent.
pub const TEMP_PLACEHOLDER: &str = "--°";
/// Rendered when a timestamp is absent.
pub const TIME_PLACEHOLDER: &str = "--:--";

pub type Rgb = (u8, u8, u8);

/// Two-stop vertical gradient backing a themed surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub top: Rgb,
    pub bottom: Rgb,
}

const fn grad(top: Rgb, bottom: Rgb) -> Background {
    Background { top, bottom }
}

// Shared palette stops, lifted from the web theme this replaces.
const GRAY_200: Rgb = (229, 231, 235);
const GRAY_300: Rgb = (209, 213, 219);
const GRAY_400: Rgb = (156, 163, 175);
const GRAY_500: Rgb = (107, 114, 128);
const GRAY_600: Rgb = (75, 85, 99);
const GRAY_700: Rgb = (55, 65, 81);
const GRAY_800: Rgb = (31, 41, 55);
const GRAY_900: Rgb = (17, 24, 39);
const GRAY_950: Rgb = (3, 7, 18);
const BLUE_200: Rgb = (191, 219, 254);
const BLUE_400: Rgb = (96, 165, 250);
const BLUE_600: Rgb = (37, 99, 235);
const BLUE_800: Rgb = (30, 64, 175);
const BLUE_950: Rgb = (23, 37, 84);

/// Everything the UI derives from one condition category.
///
/// One table per category keeps icon, sentences, and both palettes from
/// drifting apart when a category is added.
#[derive(Debug, Clone, Copy)]
pub struct ConditionProfile {
    pub icon: &'static str,
    /// Night-specific glyph; categories without one keep `icon` after dark.
    pub night_icon: Option<&'static str>,
    pub advice: &'static str,
    pub message: &'static str,
    pub dark: Background,
    pub light: Background,
}

const CLEAR: ConditionProfile = ConditionProfile {
    icon: "☀️",
    night_icon: Some("🌙"),
    advice: "Enjoy the sunshine!",
    message: "Perfect day for a walk!",
    dark: grad(GRAY_900, BLUE_950),
    light: grad(BLUE_600, BLUE_800),
};

const CLOUDS: ConditionProfile = ConditionProfile {
    icon: "⛅",
    night_icon: Some("☁️"),
    advice: "Might be a bit gloomy today.",
    message: "Cloudy skies, keep an eye on it!",
    dark: grad(GRAY_800, GRAY_950),
    light: grad(GRAY_300, BLUE_400),
};

const RAIN: ConditionProfile = ConditionProfile {
    icon: "🌧️",
    night_icon: None,
    advice: "Don't forget your umbrella.",
    message: "Grab an umbrella, it's rainy!",
    dark: grad(GRAY_700, GRAY_900),
    light: grad(GRAY_400, GRAY_600),
};

const DRIZZLE: ConditionProfile = ConditionProfile {
    icon: "🌦️",
    night_icon: None,
    advice: "Light rain; dress accordingly.",
    message: "Light showers, bring a raincoat!",
    dark: grad(GRAY_600, GRAY_800),
    light: grad(GRAY_400, GRAY_600),
};

const THUNDERSTORM: ConditionProfile = ConditionProfile {
    icon: "⛈️",
    night_icon: None,
    advice: "Stay safe indoors!",
    message: "Stay indoors, storms ahead!",
    dark: grad(GRAY_900, GRAY_950),
    light: grad(GRAY_500, GRAY_700),
};

const SNOW: ConditionProfile = ConditionProfile {
    icon: "❄️",
    night_icon: None,
    advice: "Time for snow boots!",
    message: "Bundle up, it's snowy!",
    dark: grad(GRAY_400, GRAY_600),
    light: grad(GRAY_200, GRAY_400),
};

const MIST: ConditionProfile = ConditionProfile {
    icon: "🌫️",
    night_icon: None,
    advice: "Drive carefully in the mist.",
    message: "Misty, drive carefully!",
    dark: grad(GRAY_500, GRAY_700),
    light: grad(GRAY_300, GRAY_500),
};

const FOG: ConditionProfile = ConditionProfile {
    icon: "🌫️",
    night_icon: None,
    advice: "Visibility is low, be cautious.",
    message: "Foggy, take it slow!",
    dark: grad(GRAY_500, GRAY_700),
    light: grad(GRAY_300, GRAY_500),
};

const HAZE: ConditionProfile = ConditionProfile {
    icon: "🌫️",
    night_icon: None,
    advice: "Air quality might be poor.",
    message: "Hazy, limit outdoor time!",
    dark: grad(GRAY_500, GRAY_700),
    light: grad(GRAY_300, GRAY_500),
};

// Falls back to the clear palettes.
const OTHER: ConditionProfile = ConditionProfile {
    icon: "🌡️",
    night_icon: None,
    advice: "Have a great day!",
    message: "Plan your day!",
    dark: CLEAR.dark,
    light: CLEAR.light,
};

pub fn profile(condition: Condition) -> &'static ConditionProfile {
    match condition {
        Condition::Clear => &CLEAR,
        Condition::Clouds => &CLOUDS,
        Condition::Rain => &RAIN,
        Condition::Drizzle => &DRIZZLE,
        Condition::Thunderstorm => &THUNDERSTORM,
        Condition::Snow => &SNOW,
        Condition::Mist => &MIST,
        Condition::Fog => &FOG,
        Condition::Haze => &HAZE,
        Condition::Other => &OTHER,
    }
}

pub fn icon(condition: Condition, is_night: bool) -> &'static str {
    let profile = profile(condition);
    if is_night {
        profile.night_icon.unwrap_or(profile.icon)
    } else {
        profile.icon
    }
}

pub fn advice(condition: Condition) -> &'static str {
    profile(condition).advice
}

pub fn message(condition: Condition) -> &'static str {
    profile(condition).message
}

pub fn background(condition: Condition, dark_mode: bool) -> Background {
    let profile = profile(condition);
    if dark_mode { profile.dark } else { profile.light }
}

/// Page background when no snapshot is available yet.
pub fn default_background(dark_mode: bool) -> Background {
    if dark_mode {
        grad(GRAY_900, BLUE_950)
    } else {
        grad(BLUE_200, BLUE_400)
    }
}

/// True when the observation falls outside [sunrise, sunset].
///
/// Sunrise and sunset arrive already consistent with the offset observation
/// time and are compared as-is.
pub fn is_night(observed_at: i64, sunrise: i64, sunset: i64, timezone_offset_secs: i32) -> bool {
    let local = observed_at + i64::from(timezone_offset_secs);
    local < sunrise || local > sunset
}

/// "20°C" / "69°F"; conversion happens before rounding.
pub fn format_temperature(celsius: Option<f64>, use_fahrenheit: bool) -> String {
    let Some(celsius) = celsius else {
        return TEMP_PLACEHOLDER.to_string();
    };

    if use_fahrenheit {
        let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
        format!("{}°F", fahrenheit.round() as i64)
    } else {
        format!("{}°C", celsius.round() as i64)
    }
}

/// Local 12-hour "HH:MM AM/PM" at the given offset.
pub fn format_time(unix_secs: Option<i64>, timezone_offset_secs: i32) -> String {
    unix_secs
        .and_then(|secs| local_time(secs, timezone_offset_secs))
        .map(|local| local.format("%I:%M %p").to_string())
        .unwrap_or_else(|| TIME_PLACEHOLDER.to_string())
}

pub fn day_of_week(unix_secs: i64, timezone_offset_secs: i32) -> &'static str {
    let Some(local) = local_time(unix_secs, timezone_offset_secs) else {
        return "---";
    };

    match local.weekday() {
        Weekday::Sun => "Sun",
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
    }
}
