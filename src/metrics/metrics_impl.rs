use crate::metrics::traits::FitnessMetricsRecorder;

#[derive(Debug, Default, Clone)]
pub struct FitnessCacheMetrics {
    pub find_calls: u64,
    pub find_hits: u64,
    pub find_misses: u64,
    pub insert_calls: u64,
    pub insert_new: u64,
    pub duplicate_inserts: u64,
    pub evicted_entries: u64,
    pub forgotten_entries: u64,
    pub update_calls: u64,
    pub clear_calls: u64,
}

impl FitnessMetricsRecorder for FitnessCacheMetrics {
    fn record_find_hit(&mut self) {
        self.find_calls += 1;
        self.find_hits += 1;
    }

    fn record_find_miss(&mut self) {
        self.find_calls += 1;
        self.find_misses += 1;
    }

    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }

    fn record_duplicate_insert(&mut self) {
        self.duplicate_inserts += 1;
    }

    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }

    fn record_forgotten_entry(&mut self) {
        self.forgotten_entries += 1;
    }

    fn record_update_call(&mut self) {
        self.update_calls += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}
