//! DHAT heap profiler for fitcache.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>
//!
//! Set `RUST_LOG=fitcache=debug` to see cache lifecycle events.

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use fitcache::cache::FitnessCache;
use fitcache::config::FitnessCacheConfig;
use fitcache::key::derive_key;
use tracing_subscriber::EnvFilter;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

/// Probe errors for behaviour class `class`: candidates in the same class
/// are functionally equivalent on the probe prefix.
fn probe_errors(class: u64, len: usize, out: &mut Vec<f64>) {
    out.clear();
    let mut rng = XorShift64::new(class.wrapping_mul(0x9e37_79b9_7f4a_7c15));
    out.extend((0..len).map(|_| rng.next_f64()));
}

/// Search-like workload: most candidates fall into a small set of common
/// behaviours, the rest are novel.
fn search_workload(cache: &mut FitnessCache, candidates: usize, common_classes: u64, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let mut train = Vec::with_capacity(cache.train_example_count());
    let mut valid = Vec::with_capacity(cache.valid_example_count());
    let mut hits = 0usize;

    for _ in 0..candidates {
        let class = if rng.next_f64() < 0.7 {
            rng.next_u64() % common_classes
        } else {
            common_classes.wrapping_add(rng.next_u64())
        };
        probe_errors(class, cache.train_example_count(), &mut train);
        probe_errors(!class, cache.valid_example_count(), &mut valid);
        let key = derive_key(&train, &valid, 0, 1000);

        let (fitness, found) = cache.find(key);
        if found {
            hits += 1;
            if let Err(err) = cache.update_on_repeat(key, fitness) {
                eprintln!("  protocol error: {err}");
            }
        } else if let Err(err) = cache.insert_or_fail(key, rng.next_f64()) {
            eprintln!("  protocol error: {err}");
        }
    }

    println!("  Hits: {hits} / {candidates}");
}

fn profile(label: &str, config: FitnessCacheConfig) {
    println!("=== Profiling {label} ===");
    let mut cache = FitnessCache::new(config);

    search_workload(&mut cache, 100_000, 2_048, 42);
    cache.clear();
    search_workload(&mut cache, 50_000, 16_384, 7);

    println!("  Final size: {}", cache.len());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let _profiler = dhat::Profiler::new_heap();

    println!("fitcache DHAT Heap Profiling");
    println!("============================\n");

    profile("LRU", FitnessCacheConfig::new(4096, 10, 10));
    profile(
        "LRU + forget",
        FitnessCacheConfig::new(4096, 10, 10).with_forget_every(50),
    );

    println!("\n============================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
