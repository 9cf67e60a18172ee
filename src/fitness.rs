//! Fitness range constants and the per-key cached record.
//!
//! [`MIN_FITNESS`] doubles as the "not found" sentinel returned by
//! [`FitnessCache::find`](crate::cache::FitnessCache::find). Callers should
//! compare against this constant rather than a literal.

/// Lowest fitness a candidate can score. Also the value reported on a miss.
pub const MIN_FITNESS: f64 = 0.0;

/// Highest fitness a candidate can score.
pub const MAX_FITNESS: f64 = 1.0;

/// Value stored per key in a [`FitnessCache`](crate::cache::FitnessCache).
///
/// A record built through [`CachedEvaluation::new`] always has
/// `hit_count >= 1`. The [`Default`] record (`MIN_FITNESS`, `0`) exists only
/// as a placeholder and is never reported as a found result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedEvaluation {
    /// Fitness measured on the full evaluation that populated this entry.
    pub fitness: f64,
    /// Number of times the key has been observed, counting the insert.
    pub hit_count: u64,
}

impl CachedEvaluation {
    /// Creates the record for a freshly evaluated key.
    #[inline]
    pub fn new(fitness: f64) -> Self {
        Self {
            fitness,
            hit_count: 1,
        }
    }
}

impl Default for CachedEvaluation {
    fn default() -> Self {
        Self {
            fitness: MIN_FITNESS,
            hit_count: 0,
        }
    }
}
