//! Weather data models

use serde::{Deserialize, Serialize};

/// Instantaneous conditions for the active location. Fetched fresh on every
/// interaction, never cached.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature_c: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
    /// WMO weather interpretation code
    pub weather_code: i32,
}

/// One day of the daily forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ForecastDay {
    /// Short weekday + day-of-month label, e.g. "Mon 14"
    pub date: String,
    /// Daily maximum temperature in Celsius
    pub temp_max_c: f64,
    /// Daily minimum temperature in Celsius
    pub temp_min_c: f64,
    /// WMO weather interpretation code for the day
    pub weather_code: i32,
}

/// Daily forecast, chronological, starting today
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
}

impl Forecast {
    #[must_use]
    pub fn new(days: Vec<ForecastDay>) -> Self {
        Self { days }
    }
}
