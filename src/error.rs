//! Error types for the fitcache library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a [`FitnessCacheConfig`](crate::config::FitnessCacheConfig)
//!   is invalid (zero capacity, `forget_every == 1`).
//! - [`CacheError`]: Returned when a caller breaks the find-then-insert
//!   protocol, or when an evaluation probe asks for more examples than the
//!   dataset holds.
//! - [`InvariantError`]: Returned by `check_invariants` when the key index and
//!   the recency list disagree.
//!
//! A cache miss is never an error; [`FitnessCache::find`](crate::cache::FitnessCache::find)
//! reports it through its boolean result.
//!
//! ## Example Usage
//!
//! ```
//! use fitcache::cache::FitnessCache;
//! use fitcache::config::FitnessCacheConfig;
//! use fitcache::error::CacheError;
//!
//! let mut cache = FitnessCache::new(FitnessCacheConfig::new(8, 10, 10));
//! cache.insert_or_fail(7, 0.5).unwrap();
//!
//! // A second insert of the same key is a protocol violation.
//! let err = cache.insert_or_fail(7, 0.6).unwrap_err();
//! assert_eq!(err, CacheError::DuplicateInsert { key: 7 });
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache configuration parameters are invalid.
///
/// Produced by [`FitnessCacheConfig::validate`](crate::config::FitnessCacheConfig::validate)
/// and [`FitnessCache::try_new`](crate::cache::FitnessCache::try_new).
///
/// # Example
///
/// ```
/// use fitcache::cache::FitnessCache;
/// use fitcache::config::FitnessCacheConfig;
///
/// let err = FitnessCache::try_new(FitnessCacheConfig::new(0, 10, 10)).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// CacheError
// ---------------------------------------------------------------------------

/// Misuse of the find-then-insert protocol, or an impossible probe request.
///
/// Each variant is a logic bug on the caller's side. Production callers
/// usually treat these as fatal; tests match on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// `insert_or_fail` was called for a key that is already cached.
    DuplicateInsert { key: u64 },
    /// `update_on_repeat` was called for a key that the preceding `find` did
    /// not report as a hit.
    UpdateWithoutHit { key: u64 },
    /// The cache wants more probe examples than the dataset provides.
    ProbeTooLong {
        what: &'static str,
        requested: usize,
        available: usize,
    },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheError::DuplicateInsert { key } => {
                write!(f, "key {key:#018x} inserted while already cached")
            },
            CacheError::UpdateWithoutHit { key } => {
                write!(f, "key {key:#018x} updated without a preceding hit")
            },
            CacheError::ProbeTooLong {
                what,
                requested,
                available,
            } => write!(
                f,
                "probe needs {requested} {what} examples but the dataset has {available}"
            ),
        }
    }
}

impl std::error::Error for CacheError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
