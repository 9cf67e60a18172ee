//! # Fitness Cache
//!
//! Bounded `key -> CachedEvaluation` store with least-recently-used eviction,
//! used to skip full evaluations of candidates whose probe errors match a
//! candidate evaluated earlier.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                           FitnessCache                             │
//!   │                                                                    │
//!   │   FxHashMap<u64, NodeId>            RecencyList<Entry>             │
//!   │   ┌──────────┬────────┐                                            │
//!   │   │   key    │ NodeId │     head ─► [k3] ◄──► [k1] ◄──► [k2] ◄─ tail│
//!   │   ├──────────┼────────┤             MRU                   LRU      │
//!   │   │  k1      │  ──────┼──────────────────►                          │
//!   │   │  k2      │  ──────┼───────────────────────────────────►         │
//!   │   │  k3      │  ──────┼────────►                                   │
//!   │   └──────────┴────────┘                                            │
//!   │                                                                    │
//!   │   Entry { key, record: CachedEvaluation { fitness, hit_count } }   │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index and the list are always updated together: every find-hit and
//! every insert moves the entry to the head, every eviction pops the tail and
//! drops its index slot.
//!
//! ## Find-then-insert protocol
//!
//! ```text
//!   key = cache.hash(train_errors, valid_errors, dataset_id, num_train)
//!   match cache.find(key)
//!     (fitness, true)  → cache.update_on_repeat(key, fitness); use fitness
//!     (_, false)       → fitness = full evaluation
//!                        cache.insert_or_fail(key, fitness)
//! ```
//!
//! The two steps are not atomic. Inserting a key that is already present is
//! a caller bug and is reported as [`CacheError::DuplicateInsert`] without
//! touching the store. Shared callers should use
//! `ConcurrentFitnessCache::get_or_compute` instead (feature `concurrency`).
//!
//! ## Forgetting
//!
//! With `forget_every = n > 1`, a hit that brings an entry's hit count to `n`
//! still returns the cached fitness but removes the entry, so the next
//! occurrence of the key is evaluated again.
//!
//! ## Example
//!
//! ```
//! use fitcache::cache::FitnessCache;
//! use fitcache::config::FitnessCacheConfig;
//! use fitcache::fitness::MIN_FITNESS;
//!
//! let mut cache = FitnessCache::new(FitnessCacheConfig::new(2, 10, 10));
//! cache.insert_or_fail(1, 0.5).unwrap();
//! cache.insert_or_fail(2, 0.7).unwrap();
//!
//! assert_eq!(cache.find(1), (0.5, true)); // promotes key 1
//! cache.insert_or_fail(3, 0.9).unwrap(); // evicts key 2
//!
//! assert_eq!(cache.find(2), (MIN_FITNESS, false));
//! assert_eq!(cache.find(1), (0.5, true));
//! assert_eq!(cache.find(3), (0.9, true));
//! ```
//!
//! ## Thread Safety
//!
//! `FitnessCache` is single-owner; mutating operations take `&mut self`.

use rustc_hash::FxHashMap;

use crate::config::FitnessCacheConfig;
use crate::ds::{NodeId, RecencyList};
use crate::error::{CacheError, ConfigError, InvariantError};
use crate::fitness::{CachedEvaluation, MIN_FITNESS};
use crate::key::derive_key;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::FitnessCacheMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::FitnessMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{FitnessMetricsRecorder, MetricsSnapshotProvider};

#[derive(Debug, Clone, Copy)]
struct Entry {
    key: u64,
    record: CachedEvaluation,
}

/// LRU-bounded memo of fitness values keyed by evaluation-trace hashes.
#[derive(Debug)]
pub struct FitnessCache {
    config: FitnessCacheConfig,
    index: FxHashMap<u64, NodeId>,
    recency: RecencyList<Entry>,
    // Key dropped by the forget rule during the latest find, still eligible
    // for `update_on_repeat`.
    last_forgotten: Option<u64>,
    #[cfg(feature = "metrics")]
    metrics: FitnessCacheMetrics,
}

impl FitnessCache {
    /// Creates a cache from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid. See [`try_new`](Self::try_new).
    pub fn new(config: FitnessCacheConfig) -> Self {
        match Self::try_new(config) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache from `config`, returning an error on invalid parameters.
    ///
    /// # Example
    ///
    /// ```
    /// use fitcache::cache::FitnessCache;
    /// use fitcache::config::FitnessCacheConfig;
    ///
    /// assert!(FitnessCache::try_new(FitnessCacheConfig::new(16, 10, 10)).is_ok());
    /// assert!(FitnessCache::try_new(FitnessCacheConfig::new(0, 10, 10)).is_err());
    /// ```
    pub fn try_new(config: FitnessCacheConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        tracing::debug!(
            capacity = config.capacity,
            train_examples = config.train_example_count,
            valid_examples = config.valid_example_count,
            forget_every = config.forget_every,
            "created fitness cache"
        );
        Ok(Self {
            config,
            index: FxHashMap::with_capacity_and_hasher(config.capacity, Default::default()),
            recency: RecencyList::with_capacity(config.capacity),
            last_forgotten: None,
            #[cfg(feature = "metrics")]
            metrics: FitnessCacheMetrics::default(),
        })
    }

    /// Derives the key for an evaluation trace. See [`derive_key`].
    #[inline]
    pub fn hash(
        &self,
        train_errors: &[f64],
        valid_errors: &[f64],
        dataset_id: u64,
        num_train_examples: usize,
    ) -> u64 {
        derive_key(train_errors, valid_errors, dataset_id, num_train_examples)
    }

    /// Looks up `key`.
    ///
    /// On a hit returns `(fitness, true)`, makes the entry most recently used
    /// and counts the observation. On a miss returns `(MIN_FITNESS, false)`
    /// and changes nothing.
    pub fn find(&mut self, key: u64) -> (f64, bool) {
        self.last_forgotten = None;

        let Some(&id) = self.index.get(&key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_find_miss();
            return (MIN_FITNESS, false);
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_find_hit();

        self.recency.move_to_front(id);
        let Some(entry) = self.recency.get_mut(id) else {
            debug_assert!(false, "index points at a dead recency node");
            self.index.remove(&key);
            return (MIN_FITNESS, false);
        };
        entry.record.hit_count += 1;
        let record = entry.record;

        let forget_every = self.config.forget_every;
        if forget_every != 0 && record.hit_count >= forget_every {
            self.index.remove(&key);
            self.recency.remove(id);
            self.last_forgotten = Some(key);
            tracing::debug!(key, hit_count = record.hit_count, "forgot cached fitness");
            #[cfg(feature = "metrics")]
            self.metrics.record_forgotten_entry();
        }

        (record.fitness, true)
    }

    /// Stores `fitness` for `key`, which must have just missed.
    ///
    /// Evicts the least recently used entry first when the cache is full.
    /// Returns [`CacheError::DuplicateInsert`] and leaves the cache untouched
    /// if `key` is already present.
    pub fn insert_or_fail(&mut self, key: u64, fitness: f64) -> Result<(), CacheError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if self.index.contains_key(&key) {
            tracing::warn!(key, "insert of a key that is already cached");
            #[cfg(feature = "metrics")]
            self.metrics.record_duplicate_insert();
            return Err(CacheError::DuplicateInsert { key });
        }

        if self.index.len() >= self.config.capacity {
            self.evict_lru();
        }

        let id = self.recency.push_front(Entry {
            key,
            record: CachedEvaluation::new(fitness),
        });
        self.index.insert(key, id);

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        Ok(())
    }

    /// Notes that `key` was seen again with `fitness`.
    ///
    /// Has no effect on stored state. It must follow a hit on `key`;
    /// otherwise returns [`CacheError::UpdateWithoutHit`]. A key removed by
    /// the forget rule during that hit still counts as hit.
    pub fn update_on_repeat(&mut self, key: u64, fitness: f64) -> Result<(), CacheError> {
        #[cfg(feature = "metrics")]
        self.metrics.record_update_call();

        if !self.index.contains_key(&key) && self.last_forgotten != Some(key) {
            tracing::warn!(key, fitness, "repeat update without a preceding hit");
            return Err(CacheError::UpdateWithoutHit { key });
        }
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        tracing::debug!(entries = self.index.len(), "cleared fitness cache");
        self.index.clear();
        self.recency.clear();
        self.last_forgotten = None;
    }

    /// Training examples a caller should probe before deriving a key.
    #[inline]
    pub fn train_example_count(&self) -> usize {
        self.config.train_example_count
    }

    /// Validation examples a caller should probe before deriving a key.
    #[inline]
    pub fn valid_example_count(&self) -> usize {
        self.config.valid_example_count
    }

    #[inline]
    pub fn forget_every(&self) -> u64 {
        self.config.forget_every
    }

    #[inline]
    pub fn config(&self) -> &FitnessCacheConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns `true` if `key` is cached. Does not update recency.
    #[inline]
    pub fn contains(&self, key: u64) -> bool {
        self.index.contains_key(&key)
    }

    /// Returns a copy of the record for `key` without updating recency or
    /// hit counts.
    pub fn peek(&self, key: u64) -> Option<CachedEvaluation> {
        let id = *self.index.get(&key)?;
        self.recency.get(id).map(|entry| entry.record)
    }

    /// Cached keys, most recently used first.
    pub fn keys_by_recency(&self) -> impl Iterator<Item = u64> + '_ {
        self.recency.iter().map(|entry| entry.key)
    }

    /// Verifies that the index and the recency list describe the same set.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.recency.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but recency list holds {}",
                self.index.len(),
                self.recency.len()
            )));
        }
        if self.index.len() > self.config.capacity {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.index.len(),
                self.config.capacity
            )));
        }
        for entry in self.recency.iter() {
            let Some(&id) = self.index.get(&entry.key) else {
                return Err(InvariantError::new(format!(
                    "key {:#x} is linked but not indexed",
                    entry.key
                )));
            };
            if self.recency.get(id).map(|e| e.key) != Some(entry.key) {
                return Err(InvariantError::new(format!(
                    "index slot for key {:#x} points at another entry",
                    entry.key
                )));
            }
            if entry.record.hit_count == 0 {
                return Err(InvariantError::new(format!(
                    "key {:#x} stored with zero hit count",
                    entry.key
                )));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.recency.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("{}", err);
        }
    }

    fn evict_lru(&mut self) {
        if let Some(evicted) = self.recency.pop_back() {
            self.index.remove(&evicted.key);
            tracing::trace!(
                key = evicted.key,
                hit_count = evicted.record.hit_count,
                "evicted least recently used fitness"
            );
            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
        }
    }
}

#[cfg(feature = "metrics")]
impl FitnessCache {
    pub fn metrics_snapshot(&self) -> FitnessMetricsSnapshot {
        FitnessMetricsSnapshot {
            find_calls: self.metrics.find_calls,
            find_hits: self.metrics.find_hits,
            find_misses: self.metrics.find_misses,
            insert_calls: self.metrics.insert_calls,
            insert_new: self.metrics.insert_new,
            duplicate_inserts: self.metrics.duplicate_inserts,
            evicted_entries: self.metrics.evicted_entries,
            forgotten_entries: self.metrics.forgotten_entries,
            update_calls: self.metrics.update_calls,
            clear_calls: self.metrics.clear_calls,
            cache_len: self.index.len(),
            capacity: self.config.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl MetricsSnapshotProvider<FitnessMetricsSnapshot> for FitnessCache {
    fn snapshot(&self) -> FitnessMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> FitnessCache {
        FitnessCache::new(FitnessCacheConfig::new(capacity, 10, 5))
    }

    mod correctness {
        use super::*;

        #[test]
        fn miss_then_hit() {
            let mut cache = cache(4);
            assert_eq!(cache.find(42), (MIN_FITNESS, false));
            cache.insert_or_fail(42, 0.75).unwrap();
            assert_eq!(cache.find(42), (0.75, true));
            cache.debug_validate_invariants();
        }

        #[test]
        fn miss_does_not_mutate() {
            let mut cache = cache(2);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.2).unwrap();
            cache.find(99);
            assert_eq!(cache.keys_by_recency().collect::<Vec<_>>(), vec![2, 1]);
            assert_eq!(cache.len(), 2);
        }

        #[test]
        fn documented_capacity_two_scenario() {
            let mut cache = cache(2);
            cache.insert_or_fail(1, 0.5).unwrap();
            cache.insert_or_fail(2, 0.7).unwrap();
            assert_eq!(cache.find(1), (0.5, true));
            cache.insert_or_fail(3, 0.9).unwrap();

            assert_eq!(cache.find(2), (MIN_FITNESS, false));
            assert_eq!(cache.find(1), (0.5, true));
            assert_eq!(cache.find(3), (0.9, true));
            cache.debug_validate_invariants();
        }

        #[test]
        fn overflow_evicts_first_inserted() {
            let mut cache = cache(3);
            for key in 0..4u64 {
                cache.insert_or_fail(key, key as f64 / 10.0).unwrap();
            }
            assert_eq!(cache.len(), 3);
            assert!(!cache.contains(0));
            for key in 1..4u64 {
                assert!(cache.contains(key));
            }
        }

        #[test]
        fn hit_protects_from_eviction() {
            let mut cache = cache(3);
            for key in 1..=3u64 {
                cache.insert_or_fail(key, 0.5).unwrap();
            }
            assert!(cache.find(1).1);
            cache.insert_or_fail(4, 0.5).unwrap();
            assert!(cache.contains(1));
            assert!(!cache.contains(2));
            assert!(cache.contains(3));
            assert!(cache.contains(4));
        }

        #[test]
        fn capacity_one_keeps_latest() {
            let mut cache = cache(1);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.2).unwrap();
            assert_eq!(cache.find(1), (MIN_FITNESS, false));
            assert_eq!(cache.find(2), (0.2, true));
            assert_eq!(cache.len(), 1);
        }

        #[test]
        fn clear_empties_everything() {
            let mut cache = cache(8);
            for key in 0..5u64 {
                cache.insert_or_fail(key, 0.3).unwrap();
            }
            cache.clear();
            assert!(cache.is_empty());
            for key in 0..5u64 {
                assert_eq!(cache.find(key), (MIN_FITNESS, false));
            }
            cache.insert_or_fail(0, 0.4).unwrap();
            assert_eq!(cache.find(0), (0.4, true));
            cache.debug_validate_invariants();
        }

        #[test]
        fn counts_are_fixed_at_construction() {
            let mut cache = FitnessCache::new(FitnessCacheConfig::new(2, 13, 7));
            assert_eq!(cache.train_example_count(), 13);
            assert_eq!(cache.valid_example_count(), 7);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.1).unwrap();
            cache.insert_or_fail(3, 0.1).unwrap();
            cache.find(3);
            cache.clear();
            assert_eq!(cache.train_example_count(), 13);
            assert_eq!(cache.valid_example_count(), 7);
            assert_eq!(cache.capacity(), 2);
        }

        #[test]
        fn hash_delegates_to_key_derivation() {
            let cache = cache(2);
            assert_eq!(
                cache.hash(&[0.1], &[0.2], 3, 40),
                derive_key(&[0.1], &[0.2], 3, 40)
            );
        }
    }

    mod hit_counting {
        use super::*;

        #[test]
        fn insert_starts_at_one_and_hits_count_up() {
            let mut cache = cache(4);
            cache.insert_or_fail(5, 0.6).unwrap();
            assert_eq!(cache.peek(5), Some(CachedEvaluation::new(0.6)));
            cache.find(5);
            cache.find(5);
            assert_eq!(cache.peek(5).unwrap().hit_count, 3);
        }

        #[test]
        fn peek_does_not_promote() {
            let mut cache = cache(2);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.2).unwrap();
            assert!(cache.peek(1).is_some());
            cache.insert_or_fail(3, 0.3).unwrap();
            assert!(!cache.contains(1));
            assert_eq!(cache.peek(1), None);
        }

        #[test]
        fn forget_every_drops_entry_after_threshold() {
            let mut cache =
                FitnessCache::new(FitnessCacheConfig::new(4, 1, 1).with_forget_every(3));
            cache.insert_or_fail(9, 0.8).unwrap();
            assert_eq!(cache.find(9), (0.8, true)); // hit_count 2
            assert!(cache.contains(9));
            assert_eq!(cache.find(9), (0.8, true)); // hit_count 3, forgotten
            assert!(!cache.contains(9));
            cache.update_on_repeat(9, 0.8).unwrap();
            assert_eq!(cache.find(9), (MIN_FITNESS, false));
            cache.insert_or_fail(9, 0.85).unwrap();
            assert_eq!(cache.find(9), (0.85, true));
            cache.debug_validate_invariants();
        }

        #[test]
        fn forgotten_key_is_not_updatable_after_next_find() {
            let mut cache =
                FitnessCache::new(FitnessCacheConfig::new(4, 1, 1).with_forget_every(2));
            cache.insert_or_fail(1, 0.5).unwrap();
            cache.insert_or_fail(2, 0.5).unwrap();
            assert!(cache.find(1).1);
            assert!(cache.find(2).1);
            assert_eq!(
                cache.update_on_repeat(1, 0.5),
                Err(CacheError::UpdateWithoutHit { key: 1 })
            );
            cache.update_on_repeat(2, 0.5).unwrap();
        }
    }

    mod protocol_violations {
        use super::*;

        #[test]
        fn duplicate_insert_is_rejected_without_side_effects() {
            let mut cache = cache(2);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.2).unwrap();
            assert_eq!(
                cache.insert_or_fail(1, 0.9),
                Err(CacheError::DuplicateInsert { key: 1 })
            );
            assert_eq!(cache.peek(1), Some(CachedEvaluation::new(0.1)));
            assert_eq!(cache.keys_by_recency().collect::<Vec<_>>(), vec![2, 1]);
            cache.debug_validate_invariants();
        }

        #[test]
        fn update_on_repeat_is_a_noop_after_hit() {
            let mut cache = cache(2);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.2).unwrap();
            let (fitness, found) = cache.find(1);
            assert!(found);
            let before = cache.peek(1);
            cache.update_on_repeat(1, 0.99).unwrap();
            assert_eq!(cache.peek(1), before);
            assert_eq!(cache.keys_by_recency().collect::<Vec<_>>(), vec![1, 2]);
            assert_eq!(fitness, 0.1);
        }

        #[test]
        fn update_on_absent_key_is_rejected() {
            let mut cache = cache(2);
            assert_eq!(
                cache.update_on_repeat(3, 0.5),
                Err(CacheError::UpdateWithoutHit { key: 3 })
            );
        }

        #[test]
        #[should_panic(expected = "capacity")]
        fn new_panics_on_zero_capacity() {
            let _ = FitnessCache::new(FitnessCacheConfig::new(0, 1, 1));
        }
    }

    #[cfg(feature = "metrics")]
    mod metrics {
        use super::*;

        #[test]
        fn snapshot_tracks_operations() {
            let mut cache =
                FitnessCache::new(FitnessCacheConfig::new(2, 1, 1).with_forget_every(3));
            cache.find(1);
            cache.insert_or_fail(1, 0.1).unwrap();
            cache.insert_or_fail(2, 0.2).unwrap();
            cache.insert_or_fail(3, 0.3).unwrap();
            let _ = cache.insert_or_fail(3, 0.3);
            cache.find(3);
            cache.find(3);
            cache.update_on_repeat(3, 0.3).unwrap();
            cache.clear();

            let snapshot = cache.snapshot();
            assert_eq!(snapshot.find_calls, 3);
            assert_eq!(snapshot.find_hits, 2);
            assert_eq!(snapshot.find_misses, 1);
            assert_eq!(snapshot.insert_calls, 4);
            assert_eq!(snapshot.insert_new, 3);
            assert_eq!(snapshot.duplicate_inserts, 1);
            assert_eq!(snapshot.evicted_entries, 1);
            assert_eq!(snapshot.forgotten_entries, 1);
            assert_eq!(snapshot.update_calls, 1);
            assert_eq!(snapshot.clear_calls, 1);
            assert_eq!(snapshot.cache_len, 0);
            assert_eq!(snapshot.capacity, 2);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        #[derive(Debug, Clone)]
        enum Op {
            Find(u64),
            Insert(u64, f64),
            Clear,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                6 => (0u64..24).prop_map(Op::Find),
                6 => (0u64..24, 0.0f64..1.0).prop_map(|(k, f)| Op::Insert(k, f)),
                1 => Just(Op::Clear),
            ]
        }

        proptest! {
            #[test]
            fn prop_matches_reference_lru(
                capacity in 1usize..8,
                ops in prop::collection::vec(op(), 0..200),
            ) {
                let mut cache = FitnessCache::new(FitnessCacheConfig::new(capacity, 1, 1));
                // MRU at front.
                let mut model: VecDeque<(u64, f64)> = VecDeque::new();

                for op in ops {
                    match op {
                        Op::Find(key) => {
                            let expected = model.iter().position(|&(k, _)| k == key).map(|pos| {
                                let item = model.remove(pos).unwrap();
                                model.push_front(item);
                                item.1
                            });
                            let got = cache.find(key);
                            match expected {
                                Some(fitness) => prop_assert_eq!(got, (fitness, true)),
                                None => prop_assert_eq!(got, (MIN_FITNESS, false)),
                            }
                        },
                        Op::Insert(key, fitness) => {
                            let present = model.iter().any(|&(k, _)| k == key);
                            let result = cache.insert_or_fail(key, fitness);
                            if present {
                                prop_assert_eq!(result, Err(CacheError::DuplicateInsert { key }));
                            } else {
                                prop_assert!(result.is_ok());
                                if model.len() >= capacity {
                                    model.pop_back();
                                }
                                model.push_front((key, fitness));
                            }
                        },
                        Op::Clear => {
                            cache.clear();
                            model.clear();
                        },
                    }

                    prop_assert!(cache.len() <= capacity);
                    let keys: Vec<u64> = cache.keys_by_recency().collect();
                    let expected: Vec<u64> = model.iter().map(|&(k, _)| k).collect();
                    prop_assert_eq!(keys, expected);
                    prop_assert!(cache.check_invariants().is_ok());
                }
            }
        }
    }
}
