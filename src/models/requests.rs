//! Request DTOs for the gateway API
//!
//! Query strings arrive as raw, unvalidated strings; the gateway validates them.

use serde::Deserialize;

/// Query string for `GET /api/v1/apod`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApodParams {
    /// Optional `YYYY-MM-DD` date
    #[serde(default)]
    pub date: Option<String>,
}

/// Query string for `GET /api/v1/mars-rover/photos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoverPhotosParams {
    #[serde(default)]
    pub rover: Option<String>,
    #[serde(default)]
    pub sol: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
}
