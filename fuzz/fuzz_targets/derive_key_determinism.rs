#![no_main]

use fitcache::key::derive_key;
use libfuzzer_sys::fuzz_target;

// Arbitrary bit patterns (NaNs, infinities, signed zeros included) must
// always derive the same key, and flipping the dataset id must move it.
fuzz_target!(|data: &[u8]| {
    let errors: Vec<f64> = data
        .chunks_exact(8)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()))
        .collect();
    let split = errors.len() / 2;
    let (train, valid) = errors.split_at(split);

    let a = derive_key(train, valid, 1, data.len());
    let b = derive_key(train, valid, 1, data.len());
    assert_eq!(a, b);
    assert_ne!(a, derive_key(train, valid, 2, data.len()));
});
