//! API Module
//!
//! HTTP handlers and routing for the gateway REST API.
//!
//! # Endpoints
//! - `GET /api/v1/apod?date=YYYY-MM-DD` - Astronomy picture of the day
//! - `GET /api/v1/mars-rover/photos?rover=&sol=&camera=&page=` - Mars rover photos
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
