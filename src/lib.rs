//! Space Gateway - A validating, caching proxy for NASA's open APIs
//!
//! Fronts the Astronomy Picture of the Day and Mars rover photo endpoints
//! with input validation, a short-lived response cache and a uniform error
//! taxonomy.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod upstream;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use error::{GatewayError, Result};
pub use gateway::Gateway;
