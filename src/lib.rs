//! fitcache: functional-equivalence fitness cache for evolutionary search.
//!
//! Candidates that produce identical probe errors on the same dataset and
//! training length are assumed to score the same fitness. [`key`] turns a
//! probe trace into a `u64`, [`cache::FitnessCache`] memoizes fitness per key
//! under LRU eviction, and [`evaluate`] wires the two into an executor.

pub mod cache;
#[cfg(feature = "concurrency")]
pub mod concurrent;
pub mod config;
pub mod ds;
pub mod error;
pub mod evaluate;
pub mod fitness;
pub mod key;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
