//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::fmt;

use tracing::warn;

/// Public, heavily rate-limited NASA credential.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Placeholder value shipped in sample `.env` files.
const PLACEHOLDER_API_KEY: &str = "YOUR_NASA_API_KEY_HERE";

/// Runtime mode. Only affects how much detail error responses carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Resolved NASA API credential
    pub api_key: String,
    /// Base URL of the NASA API
    pub base_url: String,
    /// Cache freshness window in seconds
    pub cache_ttl: u64,
    /// Runtime mode
    pub environment: Environment,
    /// Allowed CORS origin in production
    pub cors_origin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `NASA_API_KEY` - API credential (default: `DEMO_KEY`, with a warning)
    /// - `NASA_BASE_URL` - Provider base URL (default: https://api.nasa.gov)
    /// - `CACHE_DURATION_SECONDS` - Cache TTL in seconds (default: 3600)
    /// - `APP_ENV` - `development` or `production` (default: development)
    /// - `CORS_ORIGIN` - Allowed origin in production (default: http://localhost:3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            api_key: resolve_api_key(env::var("NASA_API_KEY").ok()),
            base_url: env::var("NASA_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.base_url),
            cache_ttl: env::var("CACHE_DURATION_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            environment: env::var("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(defaults.environment),
            cors_origin: env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            api_key: DEMO_API_KEY.to_string(),
            base_url: "https://api.nasa.gov".to_string(),
            cache_ttl: 3600,
            environment: Environment::Development,
            cors_origin: "http://localhost:3000".to_string(),
        }
    }
}

/// Resolves the provider credential, falling back to the demo key.
pub fn resolve_api_key(raw: Option<String>) -> String {
    match raw {
        Some(key) if !key.trim().is_empty() && key != PLACEHOLDER_API_KEY => key,
        _ => {
            warn!(
                "NASA_API_KEY not found or is a placeholder. Using {}, which has strict rate limits and is not suitable for production",
                DEMO_API_KEY
            );
            DEMO_API_KEY.to_string()
        }
    }
}
