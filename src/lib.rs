//! Mini Cache - A small in-memory byte cache
//!
//! Entries expire after a fixed TTL and are removed by a background sweep
//! owned by each cache instance.

pub mod cache;
pub mod config;
pub mod error;
mod tasks;

pub use cache::TtlCache;
pub use config::CacheConfig;
pub use error::{CacheError, Result};
