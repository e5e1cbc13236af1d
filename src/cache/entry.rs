//! Cache Entry Module
//!
//! Defines a single stored value and the instant it was inserted.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored value together with its creation time.
///
/// The creation time is captured once at insertion from the monotonic clock
/// and never changes; refreshing an entry means replacing it.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    value: Bytes,
    created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    /// Returns the stored bytes.
    pub fn value(&self) -> &Bytes {
        &self.value
    }

    /// Returns the instant the entry was inserted.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Age ==
    /// Time elapsed between insertion and `now`, saturating at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl` as of `now`.
    ///
    /// An entry whose age equals the TTL exactly is still live.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}
