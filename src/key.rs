//! Cache key derivation from evaluation traces.
//!
//! A candidate is probed on a short, fixed prefix of the dataset; the
//! resulting per-example errors, together with the dataset identity and the
//! number of training examples of the full evaluation, are folded into a
//! single `u64`. Two candidates that produce the same probe errors on the same
//! configuration get the same key and therefore share one cached fitness.
//!
//! ## Mixing
//!
//! ```text
//!   state = SEED
//!   for word in [train errors.., train len, valid errors.., valid len,
//!                dataset id, num train examples]:
//!       state = rotl(state ^ avalanche(word), 29) * MUL + SEED
//!   key = avalanche(state ^ rotl(word count, 32))
//! ```
//!
//! Every step is a bijection of `state` for a fixed word, so changing any
//! single word always yields a different pre-finalization state; the final
//! avalanche is a bijection too. Errors are canonicalized first: `-0.0`
//! mixes as `0.0`, and every NaN payload mixes as the same quiet NaN.
//!
//! No randomized hasher state is involved, so keys are stable across runs,
//! processes and platforms.
//!
//! ## Example
//!
//! ```
//! use fitcache::key::derive_key;
//!
//! let a = derive_key(&[0.1, 0.2], &[0.3], 4, 1000);
//! let b = derive_key(&[0.1, 0.2], &[0.3], 4, 1000);
//! assert_eq!(a, b);
//!
//! // Same errors on another dataset do not collide with the first one.
//! assert_ne!(a, derive_key(&[0.1, 0.2], &[0.3], 5, 1000));
//! ```

use std::hash::Hasher;

const MIX_SEED: u64 = 0x9e37_79b9_7f4a_7c15;
const MIX_MUL: u64 = 0xbf58_476d_1ce4_e5b9;

/// splitmix64 finalizer.
#[inline(always)]
fn avalanche(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Bit pattern used when mixing an error value.
#[inline]
fn canonical_bits(error: f64) -> u64 {
    if error == 0.0 {
        0
    } else if error.is_nan() {
        f64::NAN.to_bits()
    } else {
        error.to_bits()
    }
}

/// Order-sensitive, deterministic 64-bit mixer.
///
/// Also usable as a [`Hasher`] for callers that want to fold extra
/// `Hash` components into a key.
///
/// ```
/// use fitcache::key::KeyMixer;
///
/// let mut mixer = KeyMixer::new();
/// mixer.mix(1);
/// mixer.mix(2);
///
/// let mut reversed = KeyMixer::new();
/// reversed.mix(2);
/// reversed.mix(1);
///
/// assert_ne!(mixer.get(), reversed.get());
/// ```
#[derive(Debug, Clone)]
pub struct KeyMixer {
    state: u64,
    words: u64,
}

impl KeyMixer {
    #[inline]
    pub fn new() -> Self {
        Self {
            state: MIX_SEED,
            words: 0,
        }
    }

    /// Folds one word into the state.
    #[inline]
    pub fn mix(&mut self, word: u64) {
        self.state = (self.state ^ avalanche(word))
            .rotate_left(29)
            .wrapping_mul(MIX_MUL)
            .wrapping_add(MIX_SEED);
        self.words = self.words.wrapping_add(1);
    }

    /// Folds one error value into the state.
    #[inline]
    pub fn mix_error(&mut self, error: f64) {
        self.mix(canonical_bits(error));
    }

    /// Returns the finalized key. Does not consume or reset the mixer.
    #[inline]
    pub fn get(&self) -> u64 {
        avalanche(self.state ^ self.words.rotate_left(32))
    }
}

impl Default for KeyMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for KeyMixer {
    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.mix(u64::from_le_bytes(word));
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.mix(i);
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.mix(i as u64);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.get()
    }
}

/// Derives the cache key for one evaluation trace.
///
/// `train_errors` and `valid_errors` are the probe errors in example order;
/// `dataset_id` identifies the dataset they were measured on and
/// `num_train_examples` is the training length of the full evaluation the
/// cached fitness will stand for. Total: empty error slices are fine.
pub fn derive_key(
    train_errors: &[f64],
    valid_errors: &[f64],
    dataset_id: u64,
    num_train_examples: usize,
) -> u64 {
    let mut mixer = KeyMixer::new();
    for &error in train_errors {
        mixer.mix_error(error);
    }
    mixer.mix(train_errors.len() as u64);
    for &error in valid_errors {
        mixer.mix_error(error);
    }
    mixer.mix(valid_errors.len() as u64);
    mixer.mix(dataset_id);
    mixer.mix(num_train_examples as u64);
    mixer.get()
}

/// Probe errors collected for one candidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorTrace {
    pub train_errors: Vec<f64>,
    pub valid_errors: Vec<f64>,
}

impl ErrorTrace {
    pub fn new(train_errors: Vec<f64>, valid_errors: Vec<f64>) -> Self {
        Self {
            train_errors,
            valid_errors,
        }
    }

    /// Key of this trace; see [`derive_key`].
    #[inline]
    pub fn key(&self, dataset_id: u64, num_train_examples: usize) -> u64 {
        derive_key(
            &self.train_errors,
            &self.valid_errors,
            dataset_id,
            num_train_examples,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_traces_share_a_key() {
        let train = [0.5, 0.25, 1.0e-9];
        let valid = [3.0, -2.0];
        assert_eq!(
            derive_key(&train, &valid, 1, 100),
            derive_key(&train.to_vec(), &valid.to_vec(), 1, 100)
        );
    }

    #[test]
    fn keys_are_pinned_across_builds() {
        assert_eq!(derive_key(&[0.5, 0.25], &[1.0], 3, 100), 0x5886_4d8a_416d_9f4d);
        assert_eq!(derive_key(&[], &[], 0, 0), 0x774e_1c3f_5b76_a5d7);
    }

    #[test]
    fn empty_trace_still_produces_a_key() {
        let k = derive_key(&[], &[], 0, 0);
        assert_eq!(k, derive_key(&[], &[], 0, 0));
        assert_ne!(k, derive_key(&[], &[], 0, 1));
    }

    #[test]
    fn each_component_moves_the_key() {
        let base = derive_key(&[0.1, 0.2], &[0.3], 7, 1000);
        assert_ne!(base, derive_key(&[0.1, 0.21], &[0.3], 7, 1000));
        assert_ne!(base, derive_key(&[0.1, 0.2], &[0.31], 7, 1000));
        assert_ne!(base, derive_key(&[0.1, 0.2], &[0.3], 8, 1000));
        assert_ne!(base, derive_key(&[0.1, 0.2], &[0.3], 7, 999));
    }

    #[test]
    fn error_order_matters() {
        assert_ne!(
            derive_key(&[0.1, 0.2], &[], 0, 10),
            derive_key(&[0.2, 0.1], &[], 0, 10)
        );
    }

    #[test]
    fn split_point_between_train_and_valid_matters() {
        assert_ne!(
            derive_key(&[0.1, 0.2], &[0.3], 0, 10),
            derive_key(&[0.1], &[0.2, 0.3], 0, 10)
        );
    }

    #[test]
    fn signed_zero_mixes_like_zero() {
        assert_eq!(
            derive_key(&[0.0], &[-0.0], 3, 5),
            derive_key(&[-0.0], &[0.0], 3, 5)
        );
    }

    #[test]
    fn all_nans_mix_alike() {
        let odd_nan = f64::from_bits(0x7ff0_0000_0000_0001);
        assert!(odd_nan.is_nan());
        assert_eq!(
            derive_key(&[f64::NAN], &[], 0, 1),
            derive_key(&[odd_nan], &[], 0, 1)
        );
        assert_ne!(
            derive_key(&[f64::NAN], &[], 0, 1),
            derive_key(&[f64::INFINITY], &[], 0, 1)
        );
    }

    #[test]
    fn trace_key_matches_free_function() {
        let trace = ErrorTrace::new(vec![1.0, 2.0], vec![3.0]);
        assert_eq!(trace.key(9, 50), derive_key(&[1.0, 2.0], &[3.0], 9, 50));
    }

    #[test]
    fn mixer_as_hasher_is_deterministic() {
        use std::hash::Hash;

        let mut a = KeyMixer::new();
        let mut b = KeyMixer::default();
        ("dataset", 42u64).hash(&mut a);
        ("dataset", 42u64).hash(&mut b);
        assert_eq!(a.finish(), b.finish());
    }

    #[test]
    fn get_does_not_reset_state() {
        let mut mixer = KeyMixer::new();
        mixer.mix(5);
        let first = mixer.get();
        assert_eq!(first, mixer.get());
        mixer.mix(6);
        assert_ne!(first, mixer.get());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn finite_errors() -> impl Strategy<Value = Vec<f64>> {
            prop::collection::vec(-1.0e6f64..1.0e6, 0..16)
        }

        proptest! {
            #[test]
            fn prop_deterministic(
                train in finite_errors(),
                valid in finite_errors(),
                dataset in any::<u64>(),
                n in 0usize..100_000,
            ) {
                prop_assert_eq!(
                    derive_key(&train, &valid, dataset, n),
                    derive_key(&train, &valid, dataset, n)
                );
            }

            #[test]
            fn prop_single_error_change_moves_key(
                mut train in prop::collection::vec(-1.0e6f64..1.0e6, 1..16),
                valid in finite_errors(),
                idx in any::<prop::sample::Index>(),
                delta in 1.0f64..100.0,
            ) {
                let before = derive_key(&train, &valid, 0, 10);
                let i = idx.index(train.len());
                train[i] += delta;
                prop_assert_ne!(before, derive_key(&train, &valid, 0, 10));
            }

            #[test]
            fn prop_dataset_change_moves_key(
                train in finite_errors(),
                dataset in any::<u64>(),
            ) {
                let other = dataset.wrapping_add(1);
                prop_assert_ne!(
                    derive_key(&train, &[], dataset, 10),
                    derive_key(&train, &[], other, 10)
                );
            }
        }
    }
}
