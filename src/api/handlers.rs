//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint. Handlers only unpack
//! query strings and wrap results; all validation lives in the gateway.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    Json,
};
use serde_json::Value;

use crate::config::{Config, Environment};
use crate::error::{ApiError, GatewayError};
use crate::gateway::Gateway;
use crate::models::{
    ApodParams, HealthResponse, RoverPhotosParams, StatsResponse, SuccessResponse,
};
use crate::upstream::NasaClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Validating, caching front for the provider
    pub gateway: Arc<Gateway>,
    /// Controls error body verbosity
    pub environment: Environment,
    /// Allowed CORS origin in production
    pub cors_origin: String,
}

impl AppState {
    /// Creates a new AppState around an existing gateway.
    pub fn new(gateway: Gateway, environment: Environment) -> Self {
        Self {
            gateway: Arc::new(gateway),
            environment,
            cors_origin: Config::default().cors_origin,
        }
    }

    /// Builds the NASA client, cache and gateway from configuration.
    pub fn from_config(config: &Config) -> crate::error::Result<Self> {
        let client = NasaClient::new(&config.base_url, &config.api_key)?;
        let cache = crate::cache::CacheStore::new(config.cache_ttl);
        let gateway = Gateway::new(cache, Arc::new(client));

        Ok(Self {
            gateway: Arc::new(gateway),
            environment: config.environment,
            cors_origin: config.cors_origin.clone(),
        })
    }

    fn reject(&self, error: GatewayError) -> ApiError {
        ApiError::new(error, self.environment)
    }

    /// Unpacks a query string, answering in the error envelope when it
    /// cannot be deserialized (e.g. a repeated parameter).
    fn query<T>(&self, query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
        query
            .map(|Query(params)| params)
            .map_err(|rejection| self.reject(GatewayError::Validation(rejection.body_text())))
    }
}

/// Handler for GET /api/v1/apod
pub async fn apod_handler(
    State(state): State<AppState>,
    query: Result<Query<ApodParams>, QueryRejection>,
) -> Result<Json<SuccessResponse<Value>>, ApiError> {
    let params = state.query(query)?;
    let apod = state
        .gateway
        .get_apod(params.date.as_deref())
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(SuccessResponse::new(apod)))
}

/// Handler for GET /api/v1/mars-rover/photos
pub async fn rover_photos_handler(
    State(state): State<AppState>,
    query: Result<Query<RoverPhotosParams>, QueryRejection>,
) -> Result<Json<SuccessResponse<Vec<Value>>>, ApiError> {
    let params = state.query(query)?;
    let photos = state
        .gateway
        .get_rover_photos(
            params.rover.as_deref(),
            params.sol.as_deref(),
            params.camera.as_deref(),
            params.page.as_deref(),
        )
        .await
        .map_err(|e| state.reject(e))?;

    Ok(Json(SuccessResponse::list(photos)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.gateway.cache_stats().await;
    Json(StatsResponse::new(&stats, state.gateway.cache_ttl_secs().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for routes that do not exist.
pub async fn not_found_handler(State(state): State<AppState>, uri: Uri) -> ApiError {
    state.reject(GatewayError::NotFound(format!(
        "Can't find {} on this server!",
        uri.path()
    )))
}
