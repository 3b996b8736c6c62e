//! Upstream Module
//!
//! The seam between the gateway and the third-party data provider.

mod client;

pub use client::{extract_provider_message, NasaClient, REQUEST_TIMEOUT};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// A provider that answers `GET <endpoint>?<params>` with JSON.
///
/// Implementations attach credentials and translate every transport or
/// provider failure into a [`GatewayError`](crate::error::GatewayError).
/// Successful payloads are returned undecoded beyond JSON.
#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value>;
}
