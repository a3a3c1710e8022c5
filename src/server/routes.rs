//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::constants::paths;
use crate::error::Error;
use crate::random::random_number;
use crate::report::{build_report, Report};
use crate::server::state::AppState;
use crate::strikes::{SimulatorResponse, StrikeSource};

use axum::{
    extract::{Host, State},
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(paths::RANDOM, get(random_handler))
        .route(paths::STRIKES, get(strikes_handler))
        .route(paths::REPORT, get(report_handler))
        .route(paths::HEALTH, get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub status: String,
    pub message: String,
}

impl ApiError {
    /// Failure to obtain strikes for a report
    pub fn simulator(err: Error) -> Self {
        ApiError {
            status: "error".to_string(),
            message: format!("Failed to call strike simulator: {}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}

/// Random number response
#[derive(Debug, Serialize, Deserialize)]
pub struct RandomResponse {
    pub number: u32,
}

/// Random integer in [1, 99]
///
/// GET /api/random
async fn random_handler(State(state): State<Arc<AppState>>) -> Json<RandomResponse> {
    Json(RandomResponse {
        number: random_number(state.rng()),
    })
}

/// Simulated lightning strikes around the origin
///
/// GET /api/kma/lightning-strikes
async fn strikes_handler(State(state): State<Arc<AppState>>) -> Json<SimulatorResponse> {
    Json(state.simulator().respond(state.rng()))
}

/// Strikes within the monitoring radius
///
/// GET /api/gmp/lightning-report
async fn report_handler(
    State(state): State<Arc<AppState>>,
    host: Option<Host>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<Report>, ApiError> {
    let base = request_base(&uri, host.as_ref(), &headers);
    let source = state
        .strike_source(base.as_deref())
        .map_err(ApiError::simulator)?;

    let strikes = source.fetch().await.map_err(|e| {
        warn!(source = source.name(), error = %e, "strike fetch failed");
        ApiError::simulator(e)
    })?;

    let report = build_report(&state.origin, strikes);
    debug!(
        source = source.name(),
        nearby = report.nearby_strikes_count,
        "built lightning report"
    );

    Ok(Json(report))
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Liveness probe
///
/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Scheme and host the request was addressed to, e.g. `http://localhost:5000`
///
/// An absolute-form target wins over any header. Otherwise the host comes
/// from `Forwarded`, `X-Forwarded-Host` or `Host`, via the `Host` extractor.
fn request_base(uri: &Uri, host: Option<&Host>, headers: &HeaderMap) -> Option<String> {
    let authority = match (uri.authority(), host) {
        (Some(authority), _) => authority.as_str().to_string(),
        (None, Some(Host(host))) => host.clone(),
        (None, None) => return None,
    };
    let scheme = uri
        .scheme_str()
        .or_else(|| {
            headers
                .get("x-forwarded-proto")
                .and_then(|v| v.to_str().ok())
        })
        .unwrap_or("http");
    Some(format!("{}://{}", scheme, authority))
}
