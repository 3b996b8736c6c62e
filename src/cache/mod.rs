//! Cache Module
//!
//! Process-lifetime response cache with TTL freshness and lazy expiry.

mod entry;
mod key;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::CacheKey;
pub use stats::CacheStats;
pub use store::CacheStore;
