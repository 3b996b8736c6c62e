//! Cache Key Module
//!
//! Derives deterministic cache keys from an endpoint and its normalized
//! parameters.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::{GatewayError, Result};

// == Cache Key ==
/// Canonical `<endpoint>-<params>` key.
///
/// Parameters are encoded as a JSON object with sorted keys, so logically
/// identical queries collide regardless of field order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives a key from an endpoint identifier and a parameter set.
    ///
    /// `params` must serialize to a JSON object (or unit for "no parameters").
    pub fn derive<P: Serialize>(endpoint: &str, params: &P) -> Result<Self> {
        let value = serde_json::to_value(params).map_err(|e| {
            GatewayError::Defect(format!("Failed to encode cache key parameters: {}", e))
        })?;

        let canonical = match value {
            Value::Object(map) => map
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .collect::<BTreeMap<String, Value>>(),
            Value::Null => BTreeMap::new(),
            other => {
                return Err(GatewayError::Defect(format!(
                    "Cache key parameters must be an object, got {}",
                    other
                )))
            }
        };

        let encoded = serde_json::to_string(&canonical).map_err(|e| {
            GatewayError::Defect(format!("Failed to encode cache key parameters: {}", e))
        })?;

        Ok(Self(format!("{}-{}", endpoint, encoded)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CacheKey> for String {
    fn from(key: CacheKey) -> Self {
        key.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct Ab {
        b: u32,
        a: u32,
    }

    #[derive(Serialize)]
    struct Ba {
        a: u32,
        b: u32,
    }

    #[test]
    fn test_field_order_does_not_matter() {
        let k1 = CacheKey::derive("ep", &Ab { a: 1, b: 2 }).unwrap();
        let k2 = CacheKey::derive("ep", &Ba { a: 1, b: 2 }).unwrap();

        assert_eq!(k1, k2);
        assert_eq!(k1.as_str(), r#"ep-{"a":1,"b":2}"#);
    }

    #[test]
    fn test_endpoint_distinguishes_keys() {
        let params = json!({"date": "2023-01-01"});
        let k1 = CacheKey::derive("apod", &params).unwrap();
        let k2 = CacheKey::derive("rover-photos", &params).unwrap();

        assert_ne!(k1, k2);
    }

    #[test]
    fn test_null_fields_are_omitted() {
        let k1 = CacheKey::derive("apod", &json!({"date": null})).unwrap();
        let k2 = CacheKey::derive("apod", &json!({})).unwrap();
        let k3 = CacheKey::derive("apod", &()).unwrap();

        assert_eq!(k1, k2);
        assert_eq!(k2, k3);
        assert_eq!(k1.to_string(), "apod-{}");
    }

    #[test]
    fn test_non_object_params_are_a_defect() {
        let err = CacheKey::derive("apod", &42).unwrap_err();
        assert!(!err.is_operational());
    }
}
