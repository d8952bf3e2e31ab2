//! Data models for the Skycast application
//!
//! This module contains the core domain models organized by concern:
//! - Location: validated coordinates and resolved places
//! - Weather: current conditions and daily forecast entries

pub mod location;
pub mod weather;

// Re-export all public types for convenient access
pub use location::{Coordinate, ResolvedLocation};
pub use weather::{CurrentConditions, Forecast, ForecastDay};
