//! Chaskey-LTS keyed permutation.
//!
//! The permutation is turned into a block cipher with the single-key
//! Even-Mansour construction: `E_K(P) = π(P ⊕ K) ⊕ K`.

use crate::{
    Block, Key,
    permutation::{ROUNDS, State, load_state, permute, permute_inverse, store_state},
    subkeys::subkey_words,
};
use cipher::{BlockSizeUser, KeyInit, KeySizeUser, consts::U16};
use core::fmt;

#[cfg(feature = "zeroize")]
use cipher::zeroize::{Zeroize, ZeroizeOnDrop};

/// Chaskey-LTS block cipher: 128-bit key, 128-bit block, 16 rounds.
///
/// The subkeys `K1`/`K2` of the Chaskey key schedule are derived once when
/// the key is set and kept alongside it.
#[derive(Clone)]
pub struct ChaskeyLts {
    key: State,
    k1: State,
    k2: State,
}

impl KeySizeUser for ChaskeyLts {
    type KeySize = U16;
}

impl BlockSizeUser for ChaskeyLts {
    type BlockSize = U16;
}

impl KeyInit for ChaskeyLts {
    #[inline]
    fn new(key: &Key) -> Self {
        let key = load_state(key);
        let (k1, k2) = subkey_words(&key);
        Self { key, k1, k2 }
    }
}

impl ChaskeyLts {
    /// Encrypt a single block in place.
    #[inline]
    pub fn encrypt_block(&self, block: &mut Block) {
        let mut v = load_state(block);
        self.whiten(&mut v);
        permute(&mut v, ROUNDS);
        self.whiten(&mut v);
        store_state(&v, block);
    }

    /// Decrypt a single block in place.
    #[inline]
    pub fn decrypt_block(&self, block: &mut Block) {
        let mut v = load_state(block);
        self.whiten(&mut v);
        permute_inverse(&mut v, ROUNDS);
        self.whiten(&mut v);
        store_state(&v, block);
    }

    /// Subkeys `(K1, K2)` derived from the cipher key.
    #[must_use]
    pub fn subkeys(&self) -> (Key, Key) {
        let mut k1 = Key::default();
        let mut k2 = Key::default();
        store_state(&self.k1, &mut k1);
        store_state(&self.k2, &mut k2);
        (k1, k2)
    }

    #[inline(always)]
    fn whiten(&self, v: &mut State) {
        for (w, k) in v.iter_mut().zip(self.key.iter()) {
            *w ^= k;
        }
    }
}

impl fmt::Debug for ChaskeyLts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChaskeyLts { .. }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for ChaskeyLts {
    fn drop(&mut self) {
        self.key.zeroize();
        self.k1.zeroize();
        self.k2.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ChaskeyLts {}
