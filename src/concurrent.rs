//! Thread-safe fitness cache with atomic get-or-compute.
//!
//! The plain [`FitnessCache`] protocol (find, evaluate on miss, insert) is
//! not safe to race: two workers missing on the same key would both insert
//! it. [`ConcurrentFitnessCache`] holds one `parking_lot::Mutex` across the
//! whole sequence, so for any key at most one evaluation result is ever
//! inserted.
//!
//! ```text
//!   worker A ──get_or_compute(k)──┐
//!                                 ▼
//!                  ┌─────── Mutex<FitnessCache> ───────┐
//!                  │ find(k) ─hit──► update_on_repeat  │
//!                  │    └──miss──► compute() ─► insert │
//!                  └───────────────────────────────────┘
//!                                 ▲
//!   worker B ──get_or_compute(k)──┘  (waits, then hits)
//! ```
//!
//! Evaluations run under the lock and are serialized. Shard caches per
//! worker for parallel evaluation.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::FitnessCache;
use crate::config::FitnessCacheConfig;
use crate::error::ConfigError;
use crate::fitness::CachedEvaluation;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::FitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::MetricsSnapshotProvider;

/// Cloneable handle to a shared [`FitnessCache`].
///
/// # Example
///
/// ```
/// use fitcache::concurrent::ConcurrentFitnessCache;
/// use fitcache::config::FitnessCacheConfig;
///
/// let cache = ConcurrentFitnessCache::new(FitnessCacheConfig::new(100, 10, 10));
/// let mut evaluations = 0;
///
/// let first = cache.get_or_compute(7, || { evaluations += 1; 0.4 });
/// let second = cache.get_or_compute(7, || { evaluations += 1; 0.9 });
///
/// assert_eq!((first, second), (0.4, 0.4));
/// assert_eq!(evaluations, 1);
/// ```
#[derive(Clone)]
pub struct ConcurrentFitnessCache {
    inner: Arc<Mutex<FitnessCache>>,
    train_example_count: usize,
    valid_example_count: usize,
}

impl fmt::Debug for ConcurrentFitnessCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentFitnessCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

impl ConcurrentFitnessCache {
    /// # Panics
    ///
    /// Panics if the configuration is invalid. See [`try_new`](Self::try_new).
    pub fn new(config: FitnessCacheConfig) -> Self {
        Self::from_cache(FitnessCache::new(config))
    }

    pub fn try_new(config: FitnessCacheConfig) -> Result<Self, ConfigError> {
        FitnessCache::try_new(config).map(Self::from_cache)
    }

    /// Wraps an existing cache, keeping its entries.
    pub fn from_cache(cache: FitnessCache) -> Self {
        Self {
            train_example_count: cache.train_example_count(),
            valid_example_count: cache.valid_example_count(),
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns the cached fitness for `key`, or runs `compute`, caches and
    /// returns its result. The lock is held for the whole call.
    pub fn get_or_compute<F>(&self, key: u64, compute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        match self.get_or_try_compute(key, || Ok::<f64, std::convert::Infallible>(compute())) {
            Ok(fitness) => fitness,
            Err(never) => match never {},
        }
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute). Nothing
    /// is cached when `compute` fails.
    pub fn get_or_try_compute<F, E>(&self, key: u64, compute: F) -> Result<f64, E>
    where
        F: FnOnce() -> Result<f64, E>,
    {
        let mut cache = self.inner.lock();
        let (cached, found) = cache.find(key);
        if found {
            let noted = cache.update_on_repeat(key, cached);
            debug_assert!(noted.is_ok(), "hit followed by rejected repeat update");
            return Ok(cached);
        }

        let fitness = compute()?;
        let inserted = cache.insert_or_fail(key, fitness);
        debug_assert!(inserted.is_ok(), "miss followed by rejected insert");
        Ok(fitness)
    }

    /// Looks up `key` without computing anything. Promotes on hit.
    pub fn find(&self, key: u64) -> (f64, bool) {
        self.inner.lock().find(key)
    }

    pub fn peek(&self, key: u64) -> Option<CachedEvaluation> {
        self.inner.lock().peek(key)
    }

    pub fn contains(&self, key: u64) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Training examples a caller should probe. Lock-free.
    #[inline]
    pub fn train_example_count(&self) -> usize {
        self.train_example_count
    }

    /// Validation examples a caller should probe. Lock-free.
    #[inline]
    pub fn valid_example_count(&self) -> usize {
        self.valid_example_count
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut FitnessCache) -> R) -> R {
        let mut cache = self.inner.lock();
        f(&mut cache)
    }
}

#[cfg(feature = "metrics")]
impl ConcurrentFitnessCache {
    pub fn metrics_snapshot(&self) -> FitnessMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<FitnessMetricsSnapshot> for ConcurrentFitnessCache {
    fn snapshot(&self) -> FitnessMetricsSnapshot {
        self.metrics_snapshot()
    }
}
