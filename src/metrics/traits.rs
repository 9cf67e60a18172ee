//! Recorder, snapshot and export traits.

/// Counters written by the cache on every operation.
pub trait FitnessMetricsRecorder {
    fn record_find_hit(&mut self);
    fn record_find_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_duplicate_insert(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_forgotten_entry(&mut self);
    fn record_update_call(&mut self);
    fn record_clear(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
