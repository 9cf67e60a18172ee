#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FitnessMetricsSnapshot {
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

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
}

impl FitnessMetricsSnapshot {
    /// Fraction of finds that hit; `0.0` before the first find.
    pub fn hit_rate(&self) -> f64 {
        if self.find_calls == 0 {
            0.0
        } else {
            self.find_hits as f64 / self.find_calls as f64
        }
    }
}
