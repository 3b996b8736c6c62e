//! API Routes
//!
//! Configures the Axum router with all gateway endpoints.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    apod_handler, health_handler, not_found_handler, rover_photos_handler, stats_handler,
    AppState,
};
use crate::config::Environment;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/v1/apod` - Astronomy picture of the day
/// - `GET /api/v1/mars-rover/photos` - Mars rover photos
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// Any other path answers 404 in the standard error envelope. Every response
/// carries the basic security headers.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.environment, &state.cors_origin);

    Router::new()
        .route("/api/v1/apod", get(apod_handler))
        .route("/api/v1/mars-rover/photos", get(rover_photos_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any origin in development, only the configured origin in production.
fn cors_layer(environment: Environment, origin: &str) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match environment {
        Environment::Development => layer.allow_origin(Any),
        Environment::Production => match origin.parse::<HeaderValue>() {
            Ok(origin) => layer.allow_origin(origin),
            Err(_) => {
                warn!(origin, "Invalid CORS_ORIGIN, cross-origin requests will be refused");
                layer
            }
        },
    }
}
