//! Configuration Module
//!
//! Handles loading cache construction parameters from environment variables.

use std::env;

/// Default number of entries when nothing is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Cache configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `LRU_CAPACITY` - Maximum cache entries (default: 1000)
    pub fn from_env() -> Self {
        Self {
            capacity: env::var("LRU_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CAPACITY),
        }
    }

    /// Creates a Config with an explicit capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
