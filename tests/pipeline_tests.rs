//! End-to-end tests for the lookup pipeline against a mock HTTP server
//!
//! These tests drive the session orchestrator the same way the HTTP surface
//! does, with wiremock standing in for the Open-Meteo endpoints.

use serde_json::json;
use skycast::SkycastError;
use skycast::config::SkycastConfig;
use skycast::session::{SessionState, WeatherSession};
use skycast::symbols::AnimationTrigger;
use skycast::weather::WeatherApiClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Geocoding fixture for "London"
fn london_geocoding_response() -> serde_json::Value {
    json!({
        "results": [{
            "id": 2643743,
            "name": "London",
            "latitude": 51.50853,
            "longitude": -0.12574,
            "country": "United Kingdom",
            "country_code": "GB"
        }],
        "generationtime_ms": 0.5
    })
}

fn current_weather_response(weather_code: i32) -> serde_json::Value {
    json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "current_weather": {
            "time": "2025-06-02T12:00",
            "temperature": 15.2,
            "windspeed": 10.0,
            "winddirection": 230.0,
            "weathercode": weather_code
        }
    })
}

fn forecast_response() -> serde_json::Value {
    json!({
        "latitude": 51.5,
        "longitude": -0.12,
        "timezone": "Europe/London",
        "daily": {
            "time": ["2025-06-02", "2025-06-03", "2025-06-04", "2025-06-05", "2025-06-06"],
            "temperature_2m_max": [21.4, 19.0, 17.5, 20.1, 22.8],
            "temperature_2m_min": [12.1, 11.5, 10.0, 11.9, 13.4],
            "weathercode": [3, 61, 0, 2, 95]
        }
    })
}

/// Mount happy-path mocks for both weather endpoints
async fn mount_weather_mocks(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_response(3)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .mount(server)
        .await;
}

/// Create a session whose client points at the mock server
fn session_for(server: &MockServer) -> WeatherSession {
    let mut config = SkycastConfig::default();
    config.api.weather_base_url = server.uri();
    config.api.geocoding_base_url = server.uri();
    config.api.timeout_seconds = 5;

    let client = WeatherApiClient::new(&config).expect("failed to create client");
    WeatherSession::new(client)
}

#[tokio::test]
async fn test_search_resolves_london_and_displays_weather() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "London"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_response()))
        .mount(&server)
        .await;
    mount_weather_mocks(&server).await;

    let mut session = session_for(&server);
    let report = session.submit_search("London").await.expect("search failed");

    assert_eq!(report.location.display_name, "London");
    assert_eq!(report.location.country, "United Kingdom");
    let coordinate = report.location.coordinate;
    assert!((51.3..=51.7).contains(&coordinate.latitude));
    assert!((-0.5..=0.3).contains(&coordinate.longitude));

    let current = report.current.expect("current conditions missing");
    assert!((current.temperature_c - 15.2).abs() < f64::EPSILON);
    assert!((current.wind_speed_kmh - 10.0).abs() < f64::EPSILON);
    assert_eq!(current.weather_code, 3);
    assert_eq!(current.symbol, "☁️");
    assert_eq!(current.description, "Overcast");

    assert!(report.warnings.is_empty());
    assert_eq!(session.state(), SessionState::DisplayingWeather);
}

#[tokio::test]
async fn test_forecast_has_five_days_in_order_with_short_labels() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_response()))
        .mount(&server)
        .await;
    mount_weather_mocks(&server).await;

    let mut session = session_for(&server);
    let report = session.submit_search("London").await.expect("search failed");

    let forecast = report.forecast.expect("forecast missing");
    assert_eq!(forecast.len(), 5);

    let labels: Vec<&str> = forecast.iter().map(|day| day.date.as_str()).collect();
    assert_eq!(labels, ["Mon 02", "Tue 03", "Wed 04", "Thu 05", "Fri 06"]);

    assert!((forecast[0].temp_max_c - 21.4).abs() < f64::EPSILON);
    assert!((forecast[0].temp_min_c - 12.1).abs() < f64::EPSILON);
    assert_eq!(forecast[1].weather_code, 61);
    // day 5 is a thunderstorm code and carries the storm glyph
    assert_eq!(forecast[4].symbol, "⛈️");
    assert_eq!(forecast[4].description, "Thunderstorm");
}

#[tokio::test]
async fn test_unknown_place_returns_not_found_and_clears_location() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let result = session.submit_search("Nonexistentplacexyz123").await;

    let err = result.expect_err("expected a not-found error");
    assert!(matches!(err, SkycastError::NotFound { .. }));
    assert_eq!(
        err.user_message(),
        "Could not find location: 'Nonexistentplacexyz123'"
    );
    assert_eq!(session.state(), SessionState::Error);
    assert!(session.location().is_none());
}

#[tokio::test]
async fn test_missing_results_field_is_also_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"generationtime_ms": 0.2})))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let result = session.submit_search("Somewhere").await;
    assert!(matches!(result, Err(SkycastError::NotFound { .. })));
}

#[tokio::test]
async fn test_geocoder_failure_clears_previous_location() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "London"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_response()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("name", "Glitchville"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    mount_weather_mocks(&server).await;

    let mut session = session_for(&server);
    session.submit_search("London").await.expect("search failed");
    assert!(session.location().is_some());

    let result = session.submit_search("Glitchville").await;
    assert!(matches!(result, Err(SkycastError::Transport { .. })));
    assert_eq!(session.state(), SessionState::Error);
    assert!(session.location().is_none());
}

#[tokio::test]
async fn test_map_click_bypasses_geocoder() {
    let server = MockServer::start().await;

    // The geocoding endpoint must never be hit for a map click
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_response()))
        .expect(0)
        .mount(&server)
        .await;
    mount_weather_mocks(&server).await;

    let mut session = session_for(&server);
    let report = session
        .select_coordinates(51.5074, -0.1278)
        .await
        .expect("map click failed");

    assert_eq!(report.location.display_name, "Lat: 51.5074, Lon: -0.1278");
    assert_eq!(report.location.country, "");
    assert!(report.current.is_some());
    assert_eq!(session.state(), SessionState::DisplayingWeather);

    server.verify().await;
}

#[tokio::test]
async fn test_current_failure_leaves_forecast_intact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let report = session
        .select_coordinates(51.5074, -0.1278)
        .await
        .expect("map click failed");

    assert!(report.current.is_none());
    assert_eq!(report.forecast.expect("forecast missing").len(), 5);
    assert_eq!(
        report.warnings,
        ["Could not retrieve weather data for this location."]
    );
    assert_eq!(report.animation, AnimationTrigger::None);
}

#[tokio::test]
async fn test_forecast_failure_leaves_current_intact() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_response(3)))
        .mount(&server)
        .await;
    // Upstream answers but without the daily block
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"latitude": 51.5})))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let report = session
        .select_coordinates(51.5074, -0.1278)
        .await
        .expect("map click failed");

    assert!(report.current.is_some());
    assert!(report.forecast.is_none());
    assert_eq!(report.warnings, ["Could not retrieve forecast data."]);
}

#[tokio::test]
async fn test_incomplete_current_weather_block_is_a_warning() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"current_weather": {"temperature": 15.2}}),
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let report = session
        .select_coordinates(51.5074, -0.1278)
        .await
        .expect("map click failed");

    assert!(report.current.is_none());
    assert_eq!(
        report.warnings,
        ["Could not retrieve weather data for this location."]
    );
}

#[tokio::test]
async fn test_snow_code_sets_snow_animation_trigger() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("current_weather", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_weather_response(75)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .mount(&server)
        .await;

    let mut session = session_for(&server);
    let report = session
        .select_coordinates(47.0, 11.0)
        .await
        .expect("map click failed");

    assert_eq!(report.animation, AnimationTrigger::Snow);
}

#[tokio::test]
async fn test_new_selection_replaces_location_wholesale() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(london_geocoding_response()))
        .mount(&server)
        .await;
    mount_weather_mocks(&server).await;

    let mut session = session_for(&server);
    session.submit_search("London").await.expect("search failed");
    session
        .select_coordinates(48.8566, 2.3522)
        .await
        .expect("map click failed");

    let location = session.location().expect("location missing");
    assert_eq!(location.display_name, "Lat: 48.8566, Lon: 2.3522");
    assert_eq!(location.country, "");
}
