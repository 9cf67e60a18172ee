//! Construction parameters for a [`FitnessCache`](crate::cache::FitnessCache).
//!
//! ```
//! use fitcache::config::FitnessCacheConfig;
//!
//! let config = FitnessCacheConfig::new(100_000, 10, 10).with_forget_every(50);
//! assert!(config.validate().is_ok());
//!
//! // A forget threshold of 1 would drop every entry on its first hit.
//! assert!(FitnessCacheConfig::new(10, 10, 10).with_forget_every(1).validate().is_err());
//! ```

use crate::error::ConfigError;

/// Immutable cache configuration.
///
/// `train_example_count` and `valid_example_count` tell the caller how many
/// examples to probe before deriving a key; the cache itself only stores
/// and returns them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitnessCacheConfig {
    /// Maximum number of cached entries.
    pub capacity: usize,
    /// Training examples to probe per candidate.
    pub train_example_count: usize,
    /// Validation examples to probe per candidate.
    pub valid_example_count: usize,
    /// Drop an entry once a hit brings its hit count to this value, so the
    /// fitness is re-measured. `0` disables forgetting.
    pub forget_every: u64,
}

impl FitnessCacheConfig {
    pub fn new(capacity: usize, train_example_count: usize, valid_example_count: usize) -> Self {
        Self {
            capacity,
            train_example_count,
            valid_example_count,
            forget_every: 0,
        }
    }

    /// Sets the forget threshold. See [`forget_every`](Self::forget_every).
    pub fn with_forget_every(mut self, forget_every: u64) -> Self {
        self.forget_every = forget_every;
        self
    }

    /// Checks the parameters without building a cache.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        if self.forget_every == 1 {
            return Err(ConfigError::new(
                "forget_every must be 0 (disabled) or greater than 1, got 1",
            ));
        }
        Ok(())
    }
}
