//! Error types and handling for the Skycast application

use thiserror::Error;

/// Main error type for the Skycast application
///
/// The three upstream-facing variants mirror how the lookup pipeline can
/// fail: the geocoder found nothing (`NotFound`), the weather service
/// answered but left out the expected data block (`Unavailable`), or the
/// request itself failed (`Transport`, covering timeouts, non-2xx statuses
/// and malformed bodies).
#[derive(Error, Debug)]
pub enum SkycastError {
    /// Geocoder returned zero matches for a place name
    #[error("location not found: '{name}'")]
    NotFound { name: String },

    /// Upstream responded but omitted the expected data block
    #[error("upstream response is missing the '{block}' block")]
    Unavailable { block: &'static str },

    /// Network/HTTP-level failure, including timeouts and non-2xx statuses
    #[error("transport error: {message}")]
    Transport { message: String },

    /// Input validation errors
    #[error("invalid input: {message}")]
    Validation { message: String },

    /// Configuration-related errors
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl SkycastError {
    /// Create a new not-found error for a place name
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a new unavailable error for a missing response block
    pub fn unavailable(block: &'static str) -> Self {
        Self::Unavailable { block }
    }

    /// Create a new transport error
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SkycastError::NotFound { name } => {
                format!("Could not find location: '{name}'")
            }
            SkycastError::Unavailable { .. } => {
                "Could not retrieve weather data for this location.".to_string()
            }
            SkycastError::Transport { .. } => {
                "Unable to connect to the weather service. Please check your internet connection."
                    .to_string()
            }
            SkycastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SkycastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SkycastError {
    fn from(err: reqwest::Error) -> Self {
        SkycastError::Transport {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = SkycastError::not_found("Atlantis");
        assert!(matches!(not_found, SkycastError::NotFound { .. }));

        let transport = SkycastError::transport("connection refused");
        assert!(matches!(transport, SkycastError::Transport { .. }));

        let validation = SkycastError::validation("empty place name");
        assert!(matches!(validation, SkycastError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let not_found = SkycastError::not_found("Atlantis");
        assert_eq!(not_found.user_message(), "Could not find location: 'Atlantis'");

        let unavailable = SkycastError::unavailable("current_weather");
        assert!(unavailable.user_message().contains("Could not retrieve"));

        let transport = SkycastError::transport("timeout");
        assert!(transport.user_message().contains("Unable to connect"));

        let validation = SkycastError::validation("empty place name");
        assert!(validation.user_message().contains("empty place name"));
    }
}
