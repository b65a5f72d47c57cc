//! Chaskey key schedule.
//!
//! The two subkeys are `K1 = 2·K` and `K2 = 2·K1`, where multiplication by
//! `x` is taken in GF(2^128) modulo `x^128 + x^7 + x^2 + x + 1`. The key is
//! read as a little-endian 128-bit integer, matching the word order of the
//! permutation state.

use crate::{
    Key,
    permutation::{State, load_state, store_state},
};

/// Low word of the reduction polynomial `x^7 + x^2 + x + 1`.
const REDUCTION: u32 = 0x87;

/// Multiply a 128-bit value by `x` in GF(2^128).
#[inline]
pub(crate) fn times_two(v: &State) -> State {
    [
        (v[0] << 1) ^ (REDUCTION & (v[3] >> 31).wrapping_neg()),
        (v[1] << 1) | (v[0] >> 31),
        (v[2] << 1) | (v[1] >> 31),
        (v[3] << 1) | (v[2] >> 31),
    ]
}

/// Derive the subkey words `(K1, K2)` from key words.
#[inline]
pub(crate) fn subkey_words(key: &State) -> (State, State) {
    let k1 = times_two(key);
    let k2 = times_two(&k1);
    (k1, k2)
}

/// Derive the Chaskey subkeys `(K1, K2)` from a 128-bit key.
#[must_use]
pub fn derive_subkeys(key: &Key) -> (Key, Key) {
    let (k1, k2) = subkey_words(&load_state(key));

    let mut out1 = Key::default();
    let mut out2 = Key::default();
    store_state(&k1, &mut out1);
    store_state(&k2, &mut out2);
    (out1, out2)
}
