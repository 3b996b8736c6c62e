//! Error types for the gateway
//!
//! Every failure the gateway raises carries an HTTP-style status and a
//! human-readable message. `Defect` is the only non-operational kind and is
//! never shown raw to end users.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::config::Environment;
use crate::models::ErrorResponse;

// == Gateway Error Enum ==
/// Unified error type for validation, caching and upstream calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Malformed, out-of-range or missing request parameter
    #[error("{0}")]
    Validation(String),

    /// Provider answered but had no usable data for the query
    #[error("{0}")]
    NotFound(String),

    /// No response from the provider (network failure or timeout)
    #[error("{0}")]
    UpstreamUnavailable(String),

    /// Provider answered with an explicit error status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The upstream request could not be built or sent
    #[error("{0}")]
    Internal(String),

    /// Programming failure, not an expected operational outcome
    #[error("{0}")]
    Defect(String),
}

impl GatewayError {
    /// HTTP-style status classification.
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Validation(_) => 400,
            GatewayError::NotFound(_) => 404,
            GatewayError::UpstreamUnavailable(_) => 503,
            GatewayError::Upstream { status, .. } => *status,
            GatewayError::Internal(_) | GatewayError::Defect(_) => 500,
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::Validation(msg)
            | GatewayError::NotFound(msg)
            | GatewayError::UpstreamUnavailable(msg)
            | GatewayError::Internal(msg)
            | GatewayError::Defect(msg) => msg,
            GatewayError::Upstream { message, .. } => message,
        }
    }

    /// True for every error the gateway raises on purpose.
    pub fn is_operational(&self) -> bool {
        !matches!(self, GatewayError::Defect(_))
    }

    /// Envelope status: `"fail"` for caller faults, `"error"` otherwise.
    pub fn status(&self) -> &'static str {
        if (400..500).contains(&self.status_code()) {
            "fail"
        } else {
            "error"
        }
    }

    /// Short name of the error kind, used in development error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => "ValidationError",
            GatewayError::NotFound(_) => "NotFoundError",
            GatewayError::UpstreamUnavailable(_) => "UpstreamUnavailable",
            GatewayError::Upstream { .. } => "UpstreamError",
            GatewayError::Internal(_) => "InternalError",
            GatewayError::Defect(_) => "Defect",
        }
    }
}

// == API Error ==
/// A [`GatewayError`] on its way out of an HTTP handler.
///
/// The body shape depends on the runtime environment.
#[derive(Debug)]
pub struct ApiError {
    pub error: GatewayError,
    pub environment: Environment,
}

impl ApiError {
    pub fn new(error: GatewayError, environment: Environment) -> Self {
        Self { error, environment }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if !self.error.is_operational() {
            error!(error = %self.error, "Unexpected failure while handling request");
        }

        let body = match self.environment {
            Environment::Development => ErrorResponse::development(&self.error),
            Environment::Production => ErrorResponse::production(&self.error),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gateway.
pub type Result<T> = std::result::Result<T, GatewayError>;
