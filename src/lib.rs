//! Skycast - interactive weather lookup backed by the Open-Meteo API
//!
//! This library provides the location-resolution and weather-retrieval
//! pipeline behind the single-page weather app: geocoding, current
//! conditions, a 5-day forecast, the WMO weather-code catalog, and the
//! session orchestrator that assembles the render payload.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod symbols;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::SkycastConfig;
pub use error::SkycastError;
pub use models::{Coordinate, CurrentConditions, Forecast, ForecastDay, ResolvedLocation};
pub use session::{SessionState, WeatherReport, WeatherSession};
pub use symbols::{AnimationTrigger, WeatherCodeEntry};
pub use weather::WeatherApiClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;
