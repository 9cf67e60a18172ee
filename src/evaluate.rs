//! Cached evaluation driver.
//!
//! Glue between a [`FitnessCache`] and whatever executes candidates. The
//! executor only has to implement [`FitnessProbe`]: a cheap probe on a few
//! examples that yields an [`ErrorTrace`], and the expensive full evaluation
//! that yields a fitness.
//!
//! ```text
//!   evaluate_cached(cache, probe, n)
//!     │
//!     ├─ check cache counts fit the dataset
//!     ├─ trace = probe.probe_errors(train_count, valid_count)
//!     ├─ key   = trace.key(probe.dataset_id(), n)
//!     ├─ hit   → cache.update_on_repeat(key, fitness) → fitness
//!     └─ miss  → fitness = probe.evaluate(n)
//!                cache.insert_or_fail(key, fitness)   → fitness
//! ```

use crate::cache::FitnessCache;
use crate::error::CacheError;
use crate::key::ErrorTrace;

/// Executor-side view of one candidate on one dataset.
pub trait FitnessProbe {
    /// Identifies the dataset the candidate runs on.
    fn dataset_id(&self) -> u64;

    /// Training examples available for probing.
    fn max_train_examples(&self) -> usize;

    /// Validation examples available for probing.
    fn valid_steps(&self) -> usize;

    /// Runs the candidate on the first `train_count` training and
    /// `valid_count` validation examples and returns the per-example errors.
    fn probe_errors(&mut self, train_count: usize, valid_count: usize) -> ErrorTrace;

    /// Runs the full evaluation with `num_train_examples` training examples.
    fn evaluate(&mut self, num_train_examples: usize) -> f64;
}

/// Evaluates a candidate, reusing a cached fitness when its probe errors
/// match an earlier candidate's.
///
/// Fails with [`CacheError::ProbeTooLong`] if the cache asks for more probe
/// examples than the dataset has. Other errors indicate a cache protocol
/// violation and are not expected.
pub fn evaluate_cached<P>(
    cache: &mut FitnessCache,
    probe: &mut P,
    num_train_examples: usize,
) -> Result<f64, CacheError>
where
    P: FitnessProbe + ?Sized,
{
    let train_count = cache.train_example_count();
    let valid_count = cache.valid_example_count();
    if train_count > probe.max_train_examples() {
        return Err(CacheError::ProbeTooLong {
            what: "training",
            requested: train_count,
            available: probe.max_train_examples(),
        });
    }
    if valid_count > probe.valid_steps() {
        return Err(CacheError::ProbeTooLong {
            what: "validation",
            requested: valid_count,
            available: probe.valid_steps(),
        });
    }

    let trace = probe.probe_errors(train_count, valid_count);
    let key = trace.key(probe.dataset_id(), num_train_examples);

    let (cached, found) = cache.find(key);
    if found {
        cache.update_on_repeat(key, cached)?;
        tracing::trace!(key, fitness = cached, "fitness cache hit");
        return Ok(cached);
    }

    let fitness = probe.evaluate(num_train_examples);
    cache.insert_or_fail(key, fitness)?;
    tracing::trace!(key, fitness, "fitness cache miss");
    Ok(fitness)
}

/// Runs the full evaluation without a cache.
pub fn evaluate_uncached<P>(probe: &mut P, num_train_examples: usize) -> f64
where
    P: FitnessProbe + ?Sized,
{
    probe.evaluate(num_train_examples)
}
