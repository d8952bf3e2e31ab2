//! Location models for geographic coordinates and resolved places

use crate::SkycastError;
use serde::{Deserialize, Serialize};

/// A validated geographic coordinate pair
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting values outside the valid ranges
    /// (latitude -90..=90, longitude -180..=180)
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SkycastError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(SkycastError::validation(format!(
                "latitude {latitude} is outside the valid range -90 to 90"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(SkycastError::validation(format!(
                "longitude {longitude} is outside the valid range -180 to 180"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Format as a "Lat: .., Lon: .." label, as shown for map-click selections
    #[must_use]
    pub fn format_label(&self) -> String {
        format!("Lat: {:.4}, Lon: {:.4}", self.latitude, self.longitude)
    }
}

/// A location the pipeline has settled on, either via geocoding or a direct
/// map click. Replaced wholesale on every new selection, never merged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ResolvedLocation {
    /// Coordinates of the location
    pub coordinate: Coordinate,
    /// Canonical place name, or a coordinate label for map clicks
    pub display_name: String,
    /// Country name; empty when the upstream omits it or for map clicks
    pub country: String,
}

impl ResolvedLocation {
    /// Create a resolved location from a geocoding match
    #[must_use]
    pub fn new(coordinate: Coordinate, display_name: String, country: String) -> Self {
        Self {
            coordinate,
            display_name,
            country,
        }
    }

    /// Create a resolved location directly from clicked coordinates,
    /// bypassing the geocoder
    #[must_use]
    pub fn from_coordinate(coordinate: Coordinate) -> Self {
        Self {
            display_name: coordinate.format_label(),
            country: String::new(),
            coordinate,
        }
    }
}
