//! Gateway
//!
//! Composes validation, the response cache and the upstream client for each
//! supported query family.
//!
//! Validation always runs before the cache is consulted, and only
//! successful, non-empty payloads are cached. The cache lock is never held
//! across the upstream call, so concurrent misses for the same key may each
//! reach the provider.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::cache::{CacheKey, CacheStats, CacheStore};
use crate::error::{GatewayError, Result};
use crate::upstream::Upstream;
use crate::validation::{validate_apod_query, validate_rover_query};

const APOD_CACHE_ENDPOINT: &str = "apod";
const ROVER_PHOTOS_CACHE_ENDPOINT: &str = "rover-photos";

const APOD_PATH: &str = "/planetary/apod";

fn rover_photos_path(rover: &str) -> String {
    format!("/mars-photos/api/v1/rovers/{}/photos", rover)
}

/// Validating, caching front for the provider.
pub struct Gateway {
    cache: Mutex<CacheStore<Value>>,
    upstream: Arc<dyn Upstream>,
}

impl Gateway {
    pub fn new(cache: CacheStore<Value>, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            cache: Mutex::new(cache),
            upstream,
        }
    }

    // == Picture of the Day ==
    /// Returns the picture-of-the-day record for `raw_date` (today if absent).
    pub async fn get_apod(&self, raw_date: Option<&str>) -> Result<Value> {
        let query = validate_apod_query(raw_date)?;
        let key = CacheKey::derive(APOD_CACHE_ENDPOINT, &query)?;

        if let Some(cached) = self.cache.lock().await.get(&key) {
            debug!(key = %key, "Cache hit for apod");
            return Ok(cached);
        }

        info!(key = %key, "Cache miss for apod, fetching from NASA API");
        let params: Vec<(&str, String)> = query
            .date
            .iter()
            .map(|date| ("date", date.clone()))
            .collect();
        let payload = self.upstream.fetch(APOD_PATH, &params).await?;

        if !is_apod_record(&payload) {
            let message = payload
                .get("msg")
                .and_then(Value::as_str)
                .unwrap_or("Astronomy Picture of the Day not found or invalid date.");
            return Err(GatewayError::NotFound(message.to_string()));
        }

        self.cache.lock().await.set(key, payload.clone());
        Ok(payload)
    }

    // == Rover Photos ==
    /// Returns the photos matching a rover/sol/camera/page query.
    pub async fn get_rover_photos(
        &self,
        rover: Option<&str>,
        sol: Option<&str>,
        camera: Option<&str>,
        page: Option<&str>,
    ) -> Result<Vec<Value>> {
        let query = validate_rover_query(rover, sol, camera, page)?;
        let key = CacheKey::derive(ROVER_PHOTOS_CACHE_ENDPOINT, &query)?;

        if let Some(cached) = self.cache.lock().await.get(&key) {
            debug!(key = %key, "Cache hit for rover photos");
            return photos_of(&cached);
        }

        info!(key = %key, "Cache miss for rover photos, fetching from NASA API");
        let payload = self
            .upstream
            .fetch(
                &rover_photos_path(query.rover.as_str()),
                &query.upstream_params(),
            )
            .await?;

        let photos = photos_of(&payload)?;
        self.cache.lock().await.set(key, payload);
        Ok(photos)
    }

    // == Cache Management ==
    /// Drops every cached payload.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
        info!("Response cache cleared");
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.lock().await.stats()
    }

    pub async fn cache_ttl_secs(&self) -> u64 {
        self.cache.lock().await.ttl_secs()
    }
}

/// Only a non-empty JSON object counts as a picture-of-the-day record.
///
/// The provider reports some bad dates as a 200 with `{"code": 400, "msg": ...}`.
fn is_apod_record(payload: &Value) -> bool {
    match payload.as_object() {
        Some(map) => !map.is_empty() && map.get("code").and_then(Value::as_u64) != Some(400),
        None => false,
    }
}

fn photos_of(payload: &Value) -> Result<Vec<Value>> {
    match payload.get("photos").and_then(Value::as_array) {
        Some(photos) if !photos.is_empty() => Ok(photos.clone()),
        _ => Err(GatewayError::NotFound(
            "No photos found for the given Mars Rover criteria.".to_string(),
        )),
    }
}
