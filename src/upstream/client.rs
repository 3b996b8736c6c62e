//! NASA API client
//!
//! reqwest-backed [`Upstream`] with a bounded timeout and a fixed failure
//! translation policy:
//! 1. provider answered non-2xx: its status and the best message in the body
//! 2. no response arrived: 503
//! 3. the request could not be built: 500

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{GatewayError, Result};
use crate::upstream::Upstream;

/// Upper bound on a single provider call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const NO_RESPONSE_MESSAGE: &str = "No response from NASA API. Please try again later.";

/// Client for `api.nasa.gov`-shaped providers.
#[derive(Debug, Clone)]
pub struct NasaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    /// Creates a client using the default request timeout.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, api_key, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            GatewayError::Internal(format!("Failed to build HTTP client: {}", e))
        })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl Upstream for NasaClient {
    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let url = self.url(endpoint);
        debug!(endpoint, ?params, "Calling NASA API");

        let response = self
            .http
            .get(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    error!(endpoint, ?params, error = %e, "Request setup error");
                    GatewayError::Internal(format!("Failed to make request to NASA API: {}", e))
                } else {
                    error!(endpoint, ?params, error = %e, "No response received");
                    GatewayError::UpstreamUnavailable(NO_RESPONSE_MESSAGE.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(endpoint, ?params, status = status.as_u16(), body = %body, "NASA API error");
            return Err(translate_error_status(status, &body));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                error!(endpoint, error = %e, "Timed out reading NASA API response");
                GatewayError::UpstreamUnavailable(NO_RESPONSE_MESSAGE.to_string())
            } else {
                error!(endpoint, error = %e, "NASA API returned a non-JSON body");
                GatewayError::Upstream {
                    status: StatusCode::BAD_GATEWAY.as_u16(),
                    message: "Invalid response from NASA API.".to_string(),
                }
            }
        })
    }
}

/// Builds the error for a non-2xx provider answer.
fn translate_error_status(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| extract_provider_message(&value))
        .unwrap_or_else(|| format!("NASA API error: {}", status.as_u16()));

    GatewayError::Upstream {
        status: status.as_u16(),
        message,
    }
}

/// Picks the most useful human-readable message out of a provider error body.
///
/// Checked in order: `msg`, `error_message`, `error.message`, `message`.
pub fn extract_provider_message(body: &Value) -> Option<String> {
    let candidates = [
        body.get("msg"),
        body.get("error_message"),
        body.get("error").and_then(|e| e.get("message")),
        body.get("message"),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_message_priority() {
        let body = json!({
            "msg": "first",
            "error_message": "second",
            "message": "last"
        });
        assert_eq!(extract_provider_message(&body).as_deref(), Some("first"));

        let body = json!({ "error_message": "second", "message": "last" });
        assert_eq!(extract_provider_message(&body).as_deref(), Some("second"));

        let body = json!({ "error": { "code": "API_KEY_INVALID", "message": "bad key" } });
        assert_eq!(extract_provider_message(&body).as_deref(), Some("bad key"));

        let body = json!({ "message": "last" });
        assert_eq!(extract_provider_message(&body).as_deref(), Some("last"));
    }

    #[test]
    fn test_extract_message_ignores_non_strings() {
        let body = json!({ "msg": 42, "error": "flat string", "message": "" });
        assert_eq!(extract_provider_message(&body), None);
    }

    #[test]
    fn test_translate_with_json_body() {
        let err = translate_error_status(
            StatusCode::NOT_FOUND,
            r#"{"msg":"Not found from external API"}"#,
        );
        assert_eq!(
            err,
            GatewayError::Upstream {
                status: 404,
                message: "Not found from external API".to_string()
            }
        );
    }

    #[test]
    fn test_translate_with_unusable_body() {
        let err = translate_error_status(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "NASA API error: 500");
    }

    #[test]
    fn test_url_joining() {
        let client = NasaClient::new("https://api.nasa.gov/", "KEY").unwrap();
        assert_eq!(client.base_url(), "https://api.nasa.gov");
        assert_eq!(
            client.url("/planetary/apod"),
            "https://api.nasa.gov/planetary/apod"
        );
    }
}
