//! JSON API consumed by the rendering frontend
//!
//! Two event endpoints (search submission and map click) drive the lookup
//! session; the response body is the assembled weather report. Failures map
//! to an HTTP status plus the user-facing error message.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::SkycastError;
use crate::models::ResolvedLocation;
use crate::session::{WeatherReport, WeatherSession};

/// The single lookup session, serialized behind a mutex so interaction
/// passes never overlap
pub type SharedSession = Arc<Mutex<WeatherSession>>;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

pub fn router(session: SharedSession) -> Router {
    Router::new()
        .route("/search", post(submit_search))
        .route("/select", post(select_coordinates))
        .route("/location", get(current_location))
        .with_state(session)
}

async fn submit_search(
    State(session): State<SharedSession>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<WeatherReport>, (StatusCode, Json<ErrorBody>)> {
    let mut session = session.lock().await;
    session
        .submit_search(&request.name)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn select_coordinates(
    State(session): State<SharedSession>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<WeatherReport>, (StatusCode, Json<ErrorBody>)> {
    let mut session = session.lock().await;
    session
        .select_coordinates(request.latitude, request.longitude)
        .await
        .map(Json)
        .map_err(error_response)
}

async fn current_location(
    State(session): State<SharedSession>,
) -> Result<Json<ResolvedLocation>, StatusCode> {
    let session = session.lock().await;
    session
        .location()
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

fn error_response(err: SkycastError) -> (StatusCode, Json<ErrorBody>) {
    let status = match &err {
        SkycastError::Validation { .. } => StatusCode::BAD_REQUEST,
        SkycastError::NotFound { .. } => StatusCode::NOT_FOUND,
        SkycastError::Transport { .. } | SkycastError::Unavailable { .. } => {
            StatusCode::BAD_GATEWAY
        }
        SkycastError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ErrorBody {
            error: err.user_message(),
        }),
    )
}
