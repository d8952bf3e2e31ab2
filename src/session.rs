//! Weather lookup session
//!
//! The orchestrator behind the interactive lookup flow: a small state
//! machine holding the single "current location" slot, driven by two
//! discrete events (submit-search and map-click). Each event runs one full
//! pass through the pipeline — geocoding when needed, then both data
//! fetches — and assembles the payload the rendering layer consumes.

use crate::models::{Coordinate, CurrentConditions, ForecastDay, ResolvedLocation};
use crate::symbols::{self, AnimationTrigger};
use crate::weather::WeatherApiClient;
use crate::SkycastError;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// User-visible warning when the current-conditions fetch fails
const CURRENT_WEATHER_WARNING: &str = "Could not retrieve weather data for this location.";
/// User-visible warning when the forecast fetch fails; the reference
/// behavior does not distinguish "missing data" from "request failed"
const FORECAST_WARNING: &str = "Could not retrieve forecast data.";

/// Lifecycle of one lookup session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No location selected yet
    Idle,
    /// A geocoding request is in flight
    Resolving,
    /// A location is selected but weather has not been assembled yet
    Resolved,
    /// A report (full or partial) has been assembled for the location
    DisplayingWeather,
    /// The last resolution attempt failed; the location slot is empty
    Error,
}

/// Current conditions enriched with the catalog entry for its code
#[derive(Debug, Clone, Serialize)]
pub struct CurrentSummary {
    pub temperature_c: f64,
    pub wind_speed_kmh: f64,
    pub weather_code: i32,
    pub symbol: &'static str,
    pub description: &'static str,
}

impl From<CurrentConditions> for CurrentSummary {
    fn from(conditions: CurrentConditions) -> Self {
        let entry = symbols::lookup(conditions.weather_code);
        Self {
            temperature_c: conditions.temperature_c,
            wind_speed_kmh: conditions.wind_speed_kmh,
            weather_code: conditions.weather_code,
            symbol: entry.symbol,
            description: entry.description,
        }
    }
}

/// One forecast day enriched with the catalog entry for its code
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date: String,
    pub temp_max_c: f64,
    pub temp_min_c: f64,
    pub weather_code: i32,
    pub symbol: &'static str,
    pub description: &'static str,
}

impl From<ForecastDay> for DaySummary {
    fn from(day: ForecastDay) -> Self {
        let entry = symbols::lookup(day.weather_code);
        Self {
            date: day.date,
            temp_max_c: day.temp_max_c,
            temp_min_c: day.temp_min_c,
            weather_code: day.weather_code,
            symbol: entry.symbol,
            description: entry.description,
        }
    }
}

/// The assembled render payload for one lookup pass
///
/// Either half may be absent when its fetch failed; each failure
/// contributes exactly one entry to `warnings`.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: ResolvedLocation,
    pub current: Option<CurrentSummary>,
    pub forecast: Option<Vec<DaySummary>>,
    pub animation: AnimationTrigger,
    pub warnings: Vec<String>,
}

/// Orchestrates location resolution and weather retrieval for the single
/// active location
pub struct WeatherSession {
    client: WeatherApiClient,
    state: SessionState,
    location: Option<ResolvedLocation>,
}

impl WeatherSession {
    /// Create a new idle session
    #[must_use]
    pub fn new(client: WeatherApiClient) -> Self {
        Self {
            client,
            state: SessionState::Idle,
            location: None,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The currently selected location, if any
    #[must_use]
    pub fn location(&self) -> Option<&ResolvedLocation> {
        self.location.as_ref()
    }

    /// Handle a text search submission.
    ///
    /// Empty and whitespace-only names are rejected before the geocoder is
    /// ever invoked. A failed resolution clears any previously selected
    /// location; a successful one replaces it wholesale and produces a
    /// weather report for it.
    #[instrument(skip(self))]
    pub async fn submit_search(&mut self, name: &str) -> Result<WeatherReport, SkycastError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SkycastError::validation("Location cannot be empty"));
        }

        self.state = SessionState::Resolving;
        let location = match self.client.geocode(name).await {
            Ok(location) => location,
            Err(err) => {
                warn!("Location resolution failed: {}", err);
                self.location = None;
                self.state = SessionState::Error;
                return Err(err);
            }
        };

        info!(
            "Selected: {}, {}",
            location.display_name, location.country
        );
        self.location = Some(location.clone());
        self.state = SessionState::Resolved;

        Ok(self.display_weather(location).await)
    }

    /// Handle a map click, bypassing the geocoder.
    ///
    /// The display name is synthesized from the clicked coordinates and the
    /// country is left empty.
    #[instrument(skip(self))]
    pub async fn select_coordinates(
        &mut self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, SkycastError> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        let location = ResolvedLocation::from_coordinate(coordinate);

        info!("Selected location: {}", location.display_name);
        self.location = Some(location.clone());
        self.state = SessionState::Resolved;

        Ok(self.display_weather(location).await)
    }

    /// Fetch current conditions and the forecast for the resolved location
    /// and assemble the render payload.
    ///
    /// The two fetches are independent failure domains: either may fail
    /// without affecting the other, and each failure is reduced to a single
    /// warning string.
    async fn display_weather(&mut self, location: ResolvedLocation) -> WeatherReport {
        let coordinate = location.coordinate;
        let (current, forecast) = tokio::join!(
            self.client.current_conditions(coordinate),
            self.client.forecast(coordinate),
        );

        let mut warnings = Vec::new();

        let current = match current {
            Ok(conditions) => Some(conditions),
            Err(err) => {
                warn!("Current conditions fetch failed: {}", err);
                warnings.push(CURRENT_WEATHER_WARNING.to_string());
                None
            }
        };

        let forecast = match forecast {
            Ok(forecast) => Some(forecast),
            Err(err) => {
                warn!("Forecast fetch failed: {}", err);
                warnings.push(FORECAST_WARNING.to_string());
                None
            }
        };

        let animation = current
            .map(|conditions| AnimationTrigger::for_code(conditions.weather_code))
            .unwrap_or(AnimationTrigger::None);
        debug!("Animation trigger: {:?}", animation);

        self.state = SessionState::DisplayingWeather;

        WeatherReport {
            location,
            current: current.map(CurrentSummary::from),
            forecast: forecast
                .map(|forecast| forecast.days.into_iter().map(DaySummary::from).collect()),
            animation,
            warnings,
        }
    }
}
