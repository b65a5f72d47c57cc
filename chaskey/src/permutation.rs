//! The Chaskey permutation.
//!
//! A SipHash-style ARX network over four 32-bit words. Chaskey uses 8 rounds,
//! Chaskey-LTS uses 16.

/// Number of 32-bit words in the permutation state
pub const STATE_WORDS: usize = 4;

/// Number of rounds used by Chaskey-LTS
pub const ROUNDS: usize = 16;

/// Permutation state: four little-endian 32-bit words.
pub type State = [u32; STATE_WORDS];

/// Load a 16-byte block into state words.
#[inline(always)]
pub(crate) fn load_state(bytes: &[u8]) -> State {
    let mut state = [0u32; STATE_WORDS];
    for (word, chunk) in state.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    state
}

/// Write state words back out as 16 bytes.
#[inline(always)]
pub(crate) fn store_state(state: &State, bytes: &mut [u8]) {
    for (chunk, word) in bytes.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
}

#[inline(always)]
fn round(v: &mut State) {
    v[0] = v[0].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(5);
    v[1] ^= v[0];
    v[0] = v[0].rotate_left(16);

    v[2] = v[2].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(8);
    v[3] ^= v[2];

    v[0] = v[0].wrapping_add(v[3]);
    v[3] = v[3].rotate_left(13);
    v[3] ^= v[0];

    v[2] = v[2].wrapping_add(v[1]);
    v[1] = v[1].rotate_left(7);
    v[1] ^= v[2];
    v[2] = v[2].rotate_left(16);
}

#[inline(always)]
fn round_inverse(v: &mut State) {
    v[2] = v[2].rotate_right(16);
    v[1] ^= v[2];
    v[1] = v[1].rotate_right(7);
    v[2] = v[2].wrapping_sub(v[1]);

    v[3] ^= v[0];
    v[3] = v[3].rotate_right(13);
    v[0] = v[0].wrapping_sub(v[3]);

    v[3] ^= v[2];
    v[3] = v[3].rotate_right(8);
    v[2] = v[2].wrapping_sub(v[3]);

    v[0] = v[0].rotate_right(16);
    v[1] ^= v[0];
    v[1] = v[1].rotate_right(5);
    v[0] = v[0].wrapping_sub(v[1]);
}

/// Apply `rounds` rounds of the Chaskey permutation to `state` in place.
#[inline]
pub fn permute(state: &mut State, rounds: usize) {
    for _ in 0..rounds {
        round(state);
    }
}

/// Undo [`permute`] with the same number of rounds.
#[inline]
pub fn permute_inverse(state: &mut State, rounds: usize) {
    for _ in 0..rounds {
        round_inverse(state);
    }
}
