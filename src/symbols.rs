//! WMO weather-interpretation code catalog
//!
//! Fixed mapping from weather code to a display symbol and human-readable
//! description, plus the weather-code-family to animation-trigger rule the
//! rendering layer consumes. The table reproduces the WMO code standard as
//! published by Open-Meteo; it is not a design choice of this crate.

use serde::Serialize;

/// Display symbol and description for one weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeatherCodeEntry {
    /// Pictographic glyph shown next to the conditions
    pub symbol: &'static str,
    /// Human-readable description of the conditions
    pub description: &'static str,
}

/// Fallback entry for codes outside the catalog
pub const UNKNOWN_ENTRY: WeatherCodeEntry = WeatherCodeEntry {
    symbol: "❓",
    description: "Unknown",
};

const fn entry(symbol: &'static str, description: &'static str) -> WeatherCodeEntry {
    WeatherCodeEntry {
        symbol,
        description,
    }
}

/// Look up the catalog entry for a weather code
///
/// Total over all inputs: codes outside the WMO table return
/// [`UNKNOWN_ENTRY`] instead of failing.
#[must_use]
pub fn lookup(code: i32) -> WeatherCodeEntry {
    match code {
        0 => entry("☀️", "Clear sky"),
        1 => entry("🌤️", "Mainly clear"),
        2 => entry("🌥️", "Partly cloudy"),
        3 => entry("☁️", "Overcast"),
        45 => entry("🌫️", "Fog"),
        48 => entry("🌫️", "Depositing rime fog"),
        51 => entry("🌦️", "Light drizzle"),
        53 => entry("🌦️", "Moderate drizzle"),
        55 => entry("🌦️", "Dense drizzle"),
        56 => entry("🌧️", "Light freezing drizzle"),
        57 => entry("🌧️", "Dense freezing drizzle"),
        61 => entry("🌧️", "Slight rain"),
        63 => entry("🌧️", "Moderate rain"),
        65 => entry("🌧️", "Heavy rain"),
        66 => entry("🌧️", "Light freezing rain"),
        67 => entry("🌧️", "Heavy freezing rain"),
        71 => entry("🌨️", "Slight snow fall"),
        73 => entry("🌨️", "Moderate snow fall"),
        75 => entry("🌨️", "Heavy snow fall"),
        77 => entry("❄️", "Snow grains"),
        80 => entry("🌧️", "Slight rain showers"),
        81 => entry("🌧️", "Moderate rain showers"),
        82 => entry("🌧️", "Violent rain showers"),
        85 => entry("🌨️", "Slight snow showers"),
        86 => entry("🌨️", "Heavy snow showers"),
        95 => entry("⛈️", "Thunderstorm"),
        96 => entry("⛈️", "Thunderstorm with slight hail"),
        99 => entry("⛈️", "Thunderstorm with heavy hail"),
        _ => UNKNOWN_ENTRY,
    }
}

/// Visual effect the rendering layer should play for a weather code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationTrigger {
    /// Snow-family codes
    Snow,
    /// Thunderstorm-family codes
    Celebration,
    /// Everything else
    None,
}

impl AnimationTrigger {
    /// Map a weather code to its animation trigger
    #[must_use]
    pub fn for_code(code: i32) -> Self {
        match code {
            71 | 73 | 75 | 77 | 85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Celebration,
            _ => Self::None,
        }
    }
}
