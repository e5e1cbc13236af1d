//! Cache Module
//!
//! Provides an in-memory byte cache with TTL expiration and a background sweep.

mod entry;
mod store;
mod ttl;


// Re-export public types
pub use entry::CacheEntry;
pub use store::CacheStore;
pub use ttl::TtlCache;
