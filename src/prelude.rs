pub use crate::cache::FitnessCache;
#[cfg(feature = "concurrency")]
pub use crate::concurrent::ConcurrentFitnessCache;
pub use crate::config::FitnessCacheConfig;
pub use crate::error::{CacheError, ConfigError, InvariantError};
pub use crate::evaluate::{FitnessProbe, evaluate_cached, evaluate_uncached};
pub use crate::fitness::{CachedEvaluation, MAX_FITNESS, MIN_FITNESS};
pub use crate::key::{ErrorTrace, KeyMixer, derive_key};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::FitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::MetricsSnapshotProvider;
