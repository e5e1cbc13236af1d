//! Configuration Module
//!
//! Holds the cache's TTL and sweep interval, loadable from environment variables.

use std::env;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default time-to-live for cache entries
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Default interval between background sweeps
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5);

/// Cache configuration parameters.
///
/// Both values are fixed once a cache is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Age after which an entry is no longer served and becomes eligible for removal
    pub ttl: Duration,
    /// How often the background sweep removes expired entries
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a config with the given TTL and the default sweep interval.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Self::default()
        }
    }

    /// Replaces the sweep interval.
    pub fn with_sweep_interval(mut self, sweep_interval: Duration) -> Self {
        self.sweep_interval = sweep_interval;
        self
    }

    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Entry TTL in seconds (default: 60)
    /// - `CACHE_SWEEP_INTERVAL_SECS` - Sweep frequency in seconds (default: 5)
    pub fn from_env() -> Self {
        Self {
            ttl: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TTL),
            sweep_interval: env::var("CACHE_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_SWEEP_INTERVAL),
        }
    }

    /// Checks that the sweep can actually be scheduled.
    ///
    /// A zero TTL is accepted; a zero sweep interval is not.
    pub fn validate(&self) -> Result<()> {
        if self.sweep_interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "sweep_interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}
