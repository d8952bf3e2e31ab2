//! Weather API client for Open-Meteo integration
//!
//! HTTP client functionality for resolving place names and retrieving
//! current conditions and daily forecasts from the Open-Meteo API
//! (no API key required).

use crate::config::SkycastConfig;
use crate::models::{Coordinate, CurrentConditions, Forecast, ForecastDay, ResolvedLocation};
use crate::SkycastError;
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Number of forecast days requested from the upstream service
const FORECAST_DAYS: u8 = 5;

/// HTTP client for the Open-Meteo geocoding and forecast endpoints
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    weather_base_url: String,
    geocoding_base_url: String,
}

impl WeatherApiClient {
    /// Create a new weather API client from the application configuration
    pub fn new(config: &SkycastConfig) -> Result<Self, SkycastError> {
        let timeout = Duration::from_secs(config.api.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkycastError::transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            weather_base_url: config.api.weather_base_url.trim_end_matches('/').to_string(),
            geocoding_base_url: config
                .api
                .geocoding_base_url
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Resolve a free-text place name to coordinates via the geocoding API,
    /// requesting only the single best match
    #[instrument(skip(self))]
    pub async fn geocode(&self, place_name: &str) -> Result<ResolvedLocation, SkycastError> {
        info!("Geocoding location: '{}'", place_name);

        let url = self.geocoding_url(place_name);
        let response: open_meteo::GeocodingResponse = self.get_json(&url).await?;

        let Some(best_match) = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
        else {
            warn!("No geocoding results for '{}'", place_name);
            return Err(SkycastError::not_found(place_name));
        };

        debug!(
            "Found location: {} ({:.4}, {:.4})",
            best_match.name, best_match.latitude, best_match.longitude
        );

        Ok(ResolvedLocation::new(
            Coordinate {
                latitude: best_match.latitude,
                longitude: best_match.longitude,
            },
            best_match.name,
            best_match.country.unwrap_or_default(),
        ))
    }

    /// Fetch instantaneous conditions for a coordinate, with temperature in
    /// Celsius and wind speed in km/h as fixed unit choices
    #[instrument(skip(self))]
    pub async fn current_conditions(
        &self,
        coordinate: Coordinate,
    ) -> Result<CurrentConditions, SkycastError> {
        let url = self.current_weather_url(coordinate);
        let response: open_meteo::CurrentWeatherResponse = self.get_json(&url).await?;

        let Some(current) = response.current_weather else {
            return Err(SkycastError::unavailable("current_weather"));
        };

        match (current.temperature, current.windspeed, current.weathercode) {
            (Some(temperature_c), Some(wind_speed_kmh), Some(weather_code)) => {
                info!(
                    "Current conditions: {:.1}°C, {:.1} km/h, code {}",
                    temperature_c, wind_speed_kmh, weather_code
                );
                Ok(CurrentConditions {
                    temperature_c,
                    wind_speed_kmh,
                    weather_code,
                })
            }
            _ => Err(SkycastError::unavailable("current_weather")),
        }
    }

    /// Fetch the daily forecast for a coordinate with the service's
    /// local-timezone auto-detection
    #[instrument(skip(self))]
    pub async fn forecast(&self, coordinate: Coordinate) -> Result<Forecast, SkycastError> {
        let url = self.forecast_url(coordinate);
        let response: open_meteo::ForecastResponse = self.get_json(&url).await?;

        let Some(daily) = response.daily else {
            return Err(SkycastError::unavailable("daily"));
        };

        let forecast = assemble_forecast(daily)?;
        info!("Retrieved {}-day forecast", forecast.days.len());
        Ok(forecast)
    }

    fn geocoding_url(&self, place_name: &str) -> String {
        format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.geocoding_base_url,
            urlencoding::encode(place_name)
        )
    }

    fn current_weather_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&temperature_unit=celsius&windspeed_unit=kmh",
            self.weather_base_url, coordinate.latitude, coordinate.longitude
        )
    }

    fn forecast_url(&self, coordinate: Coordinate) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&daily=temperature_2m_max,temperature_2m_min,weathercode&timezone=auto&forecast_days={}",
            self.weather_base_url, coordinate.latitude, coordinate.longitude, FORECAST_DAYS
        )
    }

    /// Issue a GET request and decode the JSON body. Non-2xx statuses,
    /// timeouts and malformed bodies all surface as transport errors.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SkycastError> {
        debug!("Open-Meteo API request URL: {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned HTTP {}", status);
            return Err(SkycastError::transport(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| SkycastError::transport(format!("failed to parse upstream response: {e}")))
    }
}

/// Zip the parallel daily arrays into forecast days, index-wise.
///
/// The upstream contract promises equal-length arrays; when they disagree
/// the result is truncated to the shortest rather than indexing past the end.
fn assemble_forecast(daily: open_meteo::DailyData) -> Result<Forecast, SkycastError> {
    let (Some(time), Some(temp_max), Some(temp_min), Some(codes)) = (
        daily.time,
        daily.temperature_max,
        daily.temperature_min,
        daily.weather_code,
    ) else {
        return Err(SkycastError::unavailable("daily"));
    };

    let len = time
        .len()
        .min(temp_max.len())
        .min(temp_min.len())
        .min(codes.len());
    if len < time.len() {
        debug!(
            "Daily arrays have unequal lengths, truncating to {} entries",
            len
        );
    }

    let days = (0..len)
        .map(|i| ForecastDay {
            date: day_label(&time[i]),
            temp_max_c: temp_max[i],
            temp_min_c: temp_min[i],
            weather_code: codes[i],
        })
        .collect();

    Ok(Forecast::new(days))
}

/// Reformat an upstream `YYYY-MM-DD` date into a short "weekday + day"
/// label like "Mon 14". Dates that fail to parse keep their raw form.
fn day_label(raw: &str) -> String {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_or_else(|_| raw.to_string(), |date| date.format("%a %d").to_string())
}

/// Open-Meteo API response structures
mod open_meteo {
    use serde::Deserialize;

    /// Geocoding response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub results: Option<Vec<GeocodingResult>>,
    }

    #[derive(Debug, Deserialize)]
    pub struct GeocodingResult {
        pub name: String,
        pub latitude: f64,
        pub longitude: f64,
        pub country: Option<String>,
    }

    /// Current-weather response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherResponse {
        pub current_weather: Option<CurrentWeatherData>,
    }

    /// The `current_weather` block; fields are optional so an incomplete
    /// block maps to an unavailable error instead of a parse failure
    #[derive(Debug, Deserialize)]
    pub struct CurrentWeatherData {
        pub temperature: Option<f64>,
        pub windspeed: Option<f64>,
        pub weathercode: Option<i32>,
    }

    /// Daily forecast response from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub daily: Option<DailyData>,
    }

    /// Parallel daily arrays from Open-Meteo
    #[derive(Debug, Deserialize)]
    pub struct DailyData {
        pub time: Option<Vec<String>>,
        #[serde(rename = "temperature_2m_max")]
        pub temperature_max: Option<Vec<f64>>,
        #[serde(rename = "temperature_2m_min")]
        pub temperature_min: Option<Vec<f64>>,
        #[serde(rename = "weathercode")]
        pub weather_code: Option<Vec<i32>>,
    }
}
