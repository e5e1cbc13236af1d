//! Error types for the cache
//!
//! Cache reads and writes are total; errors only come from construction and teardown.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Background sweep task panicked or was cancelled
    #[error("Sweep task failed: {0}")]
    SweepTask(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CacheError::InvalidConfig("sweep_interval must be non-zero".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: sweep_interval must be non-zero"
        );

        let err = CacheError::SweepTask("task was cancelled".to_string());
        assert_eq!(err.to_string(), "Sweep task failed: task was cancelled");
    }
}
