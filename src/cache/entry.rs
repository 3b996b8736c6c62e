//! Cache Entry Module
//!
//! Defines a cached payload together with its insertion timestamp.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached payload and the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload
    pub value: V,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stored at `inserted_at` (Unix milliseconds).
    pub fn with_timestamp(value: V, inserted_at: u64) -> Self {
        Self { value, inserted_at }
    }

    // == Is Fresh ==
    /// Checks whether the entry may still be served.
    ///
    /// Fresh means strictly less than `ttl_ms` has elapsed since insertion.
    /// A clock that went backwards counts as zero elapsed time.
    pub fn is_fresh(&self, ttl_ms: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.inserted_at) < ttl_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
