//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::error::GatewayError;

/// Success envelope wrapping a provider payload.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse<T> {
    /// Always `"success"`
    pub status: &'static str,
    /// Item count, present for list payloads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
    pub data: T,
}

impl<T> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success",
            results: None,
            data,
        }
    }
}

impl<T> SuccessResponse<Vec<T>> {
    /// Wraps a list and reports its length in `results`.
    pub fn list(data: Vec<T>) -> Self {
        Self {
            status: "success",
            results: Some(data.len()),
            data,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that went upstream
    pub misses: u64,
    /// Entries currently stored, stale ones included
    pub total_entries: usize,
    /// hits / (hits + misses)
    pub hit_rate: f64,
    /// Cache freshness window in seconds
    pub ttl_seconds: u64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, ttl_seconds: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_seconds,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error details only exposed in development mode.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub kind: &'static str,
    pub status_code: u16,
    pub is_operational: bool,
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// `"fail"` for caller faults, `"error"` otherwise
    pub status: &'static str,
    /// Message safe to show the caller
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ErrorResponse {
    /// Production body: operational messages pass through, defects are masked.
    pub fn production(err: &GatewayError) -> Self {
        if err.is_operational() {
            Self {
                status: err.status(),
                message: err.message().to_string(),
                error: None,
            }
        } else {
            Self {
                status: "error",
                message: "Something went very wrong!".to_string(),
                error: None,
            }
        }
    }

    /// Development body: the real message plus error details.
    pub fn development(err: &GatewayError) -> Self {
        Self {
            status: err.status(),
            message: err.message().to_string(),
            error: Some(ErrorDetail {
                kind: err.kind(),
                status_code: err.status_code(),
                is_operational: err.is_operational(),
            }),
        }
    }
}
