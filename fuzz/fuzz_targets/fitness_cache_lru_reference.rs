#![no_main]

use fitcache::cache::FitnessCache;
use fitcache::config::FitnessCacheConfig;
use fitcache::fitness::MIN_FITNESS;
use libfuzzer_sys::fuzz_target;
use std::collections::VecDeque;

// Drives the cache with find/insert/clear and checks it against a VecDeque
// reference LRU (MRU at the front).
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Use first byte to determine capacity (1-16)
    let capacity = ((data[0] as usize) % 16).max(1);
    let mut cache = FitnessCache::new(FitnessCacheConfig::new(capacity, 1, 1));
    let mut reference: VecDeque<(u64, f64)> = VecDeque::with_capacity(capacity);

    for &byte in &data[1..] {
        let key = u64::from(byte & 0x1f);
        match byte >> 5 {
            0..=3 => {
                let expected = reference.iter().position(|&(k, _)| k == key).map(|pos| {
                    let item = reference.remove(pos).unwrap();
                    reference.push_front(item);
                    item.1
                });
                let got = cache.find(key);
                match expected {
                    Some(fitness) => assert_eq!(got, (fitness, true)),
                    None => assert_eq!(got, (MIN_FITNESS, false)),
                }
            },
            4..=6 => {
                let fitness = f64::from(byte) / 255.0;
                let present = reference.iter().any(|&(k, _)| k == key);
                assert_eq!(cache.insert_or_fail(key, fitness).is_err(), present);
                if !present {
                    if reference.len() >= capacity {
                        reference.pop_back();
                    }
                    reference.push_front((key, fitness));
                }
            },
            _ => {
                cache.clear();
                reference.clear();
            },
        }

        cache.debug_validate_invariants();
        assert_eq!(cache.len(), reference.len());
        assert!(cache.len() <= capacity);
        let order: Vec<u64> = cache.keys_by_recency().collect();
        let expected: Vec<u64> = reference.iter().map(|&(k, _)| k).collect();
        assert_eq!(order, expected);
    }
});
