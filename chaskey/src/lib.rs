//! Implementation of the [Chaskey-LTS] permutation and of a counter-mode
//! stream cipher built on it.
//!
//! Cipher functionality is accessed using traits from re-exported [`cipher`] crate.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext integrity
//! is not verified, which can lead to serious vulnerabilities!
//!
//! A nonce must never be used twice with the same key. Doing so reveals the
//! XOR of the two plaintexts. Nothing in this crate detects nonce reuse.
//!
//! USE AT YOUR OWN RISK!
//!
//! # Construction
//!
//! The 16-round Chaskey permutation `π` is keyed with the Even-Mansour
//! construction, `E_K(P) = π(P ⊕ K) ⊕ K`, and run in counter mode. The nonce
//! (up to 16 bytes, zero-padded on the right) is read as a big-endian 128-bit
//! integer and keystream block `i` is `E_K(nonce + i)`. The block index is a
//! 64-bit counter.
//!
//! # Example
//! ```
//! use chaskey::ChaskeyCtr;
//! // Import relevant traits
//! use chaskey::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
//! use hex_literal::hex;
//!
//! let key = *b"0123456789012345";
//! let nonce = *b"0000000000000000";
//! let plaintext = *b"foo";
//! let ciphertext = hex!("2bdad6");
//!
//! // Key and IV must be references to the `Array` type.
//! // Here we use the `Into` trait to convert arrays into it.
//! let mut cipher = ChaskeyCtr::new(&key.into(), &nonce.into());
//!
//! let mut buffer = plaintext;
//!
//! // apply keystream (encrypt)
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, ciphertext);
//!
//! // decrypt ciphertext by applying keystream again
//! cipher.seek(0u32);
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, plaintext);
//! ```
//!
//! Keys and nonces held in slices, with a nonce shorter than 16 bytes, go
//! through [`new_ctr`] or the one-shot helpers:
//! ```
//! # #[cfg(feature = "alloc")]
//! # {
//! let ciphertext = chaskey::process(b"0123456789012345", b"0000000000000000", b"foo")?;
//! assert_eq!(ciphertext, [0x2b, 0xda, 0xd6]);
//!
//! assert_eq!(
//!     chaskey::process(b"short key", b"", b"foo"),
//!     Err(chaskey::Error::InvalidKeyLength),
//! );
//! # }
//! # Ok::<(), chaskey::Error>(())
//! ```
//!
//! [Chaskey-LTS]: https://mouha.be/chaskey/

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub use cipher;

use cipher::{
    BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, StreamCipher, StreamCipherClosure,
    StreamCipherCore, StreamCipherCoreWrapper, StreamCipherSeekCore,
    array::Array,
    consts::U16,
};
use core::fmt;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

#[cfg(feature = "zeroize")]
use cipher::zeroize::{Zeroize, ZeroizeOnDrop};

mod backend;
mod block;
mod error;
mod mode;
pub mod permutation;
mod subkeys;

pub use block::ChaskeyLts;
pub use error::Error;
pub use mode::Mode;
pub use permutation::{ROUNDS, permute};
pub use subkeys::derive_subkeys;

/// Chaskey-LTS in counter mode.
pub type ChaskeyCtr = StreamCipherCoreWrapper<ChaskeyCtrCore>;

/// 128-bit Chaskey key.
pub type Key = Array<u8, U16>;

/// 128-bit counter-mode nonce (initial counter block).
pub type Nonce = Array<u8, U16>;

/// 128-bit block of the permutation and of the keystream.
pub type Block = Array<u8, U16>;

/// Key size in bytes
const KEY_SIZE: usize = 16;

/// Largest accepted nonce in bytes
const MAX_NONCE_SIZE: usize = 16;

/// The Chaskey-LTS counter-mode core.
///
/// Owns the keyed block cipher (key and cached subkeys), the nonce and the
/// 64-bit block counter. Leftover keystream bytes are buffered by
/// [`StreamCipherCoreWrapper`].
#[derive(Clone)]
pub struct ChaskeyCtrCore {
    cipher: ChaskeyLts,
    nonce: u128,
    counter: u64,
}

impl ChaskeyCtrCore {
    /// Keystream block for block index `counter`, without touching the
    /// session counter.
    #[inline]
    #[must_use]
    pub fn keystream_block(&self, counter: u64) -> Block {
        let input = self.nonce.wrapping_add(u128::from(counter));
        let mut block = Block::from(input.to_be_bytes());
        self.cipher.encrypt_block(&mut block);
        block
    }

    /// Underlying keyed block cipher.
    #[must_use]
    pub fn cipher(&self) -> &ChaskeyLts {
        &self.cipher
    }
}

impl KeySizeUser for ChaskeyCtrCore {
    type KeySize = U16;
}

impl IvSizeUser for ChaskeyCtrCore {
    type IvSize = U16;
}

impl BlockSizeUser for ChaskeyCtrCore {
    type BlockSize = U16;
}

impl KeyIvInit for ChaskeyCtrCore {
    #[inline]
    fn new(key: &Key, iv: &Nonce) -> Self {
        let mut nonce = [0u8; MAX_NONCE_SIZE];
        nonce.copy_from_slice(iv);

        Self {
            cipher: <ChaskeyLts as cipher::KeyInit>::new(key),
            nonce: u128::from_be_bytes(nonce),
            counter: 0,
        }
    }
}

impl StreamCipherCore for ChaskeyCtrCore {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        let rem = u64::MAX - self.counter;
        rem.try_into().ok()
    }

    fn process_with_backend(&mut self, f: impl StreamCipherClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backend::Backend(self));
    }
}

impl StreamCipherSeekCore for ChaskeyCtrCore {
    type Counter = u64;

    #[inline(always)]
    fn get_block_pos(&self) -> u64 {
        self.counter
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u64) {
        self.counter = pos;
    }
}

impl fmt::Debug for ChaskeyCtrCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ChaskeyCtrCore { .. }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for ChaskeyCtrCore {
    fn drop(&mut self) {
        self.nonce.zeroize();
        self.counter.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for ChaskeyCtrCore {}

/// Create a counter-mode session from a 16-byte key and a nonce of at most
/// 16 bytes. Shorter nonces are padded with zero bytes on the right.
///
/// # Errors
/// [`Error::InvalidKeyLength`] if `key` is not 16 bytes and
/// [`Error::InvalidNonceLength`] if `nonce` is longer than 16 bytes.
pub fn new_ctr(key: &[u8], nonce: &[u8]) -> Result<ChaskeyCtr, Error> {
    let key: [u8; KEY_SIZE] = key.try_into().map_err(|_| Error::InvalidKeyLength)?;
    if nonce.len() > MAX_NONCE_SIZE {
        return Err(Error::InvalidNonceLength);
    }

    let mut padded = [0u8; MAX_NONCE_SIZE];
    padded[..nonce.len()].copy_from_slice(nonce);

    Ok(ChaskeyCtr::new(&key.into(), &padded.into()))
}

/// Encrypt or decrypt `buf` in place with a fresh session.
///
/// # Errors
/// See [`new_ctr`]. [`Error::CounterExhausted`] cannot occur for buffers
/// addressable on current targets.
pub fn process_in_place(key: &[u8], nonce: &[u8], buf: &mut [u8]) -> Result<(), Error> {
    let mut cipher = new_ctr(key, nonce)?;
    cipher.try_apply_keystream(buf)?;
    Ok(())
}

/// Encrypt or decrypt `input` with a fresh session, returning a buffer of the
/// same length.
///
/// # Errors
/// See [`process_in_place`].
#[cfg(feature = "alloc")]
pub fn process(key: &[u8], nonce: &[u8], input: &[u8]) -> Result<Vec<u8>, Error> {
    let mut output = input.to_vec();
    process_in_place(key, nonce, &mut output)?;
    Ok(output)
}
