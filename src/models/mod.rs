//! Request and Response models for the gateway API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP query strings and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{ApodParams, RoverPhotosParams};
pub use responses::{
    ErrorDetail, ErrorResponse, HealthResponse, StatsResponse, SuccessResponse,
};
