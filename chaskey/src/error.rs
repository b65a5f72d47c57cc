//! Error types.
use cipher::StreamCipherError;
use core::fmt;

/// Errors returned by the slice-based constructors and the one-shot
/// [`process`][crate::process] helpers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Key is not exactly 16 bytes.
    InvalidKeyLength,
    /// Nonce is longer than 16 bytes.
    InvalidNonceLength,
    /// The message needs more keystream blocks than the 64-bit block counter
    /// has left.
    CounterExhausted,
    /// Mode of operation is not implemented.
    UnsupportedMode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidKeyLength => "invalid key length: expected 16 bytes",
            Error::InvalidNonceLength => "invalid nonce length: expected at most 16 bytes",
            Error::CounterExhausted => "block counter exhausted",
            Error::UnsupportedMode => "unsupported mode of operation",
        })
    }
}

impl core::error::Error for Error {}

impl From<StreamCipherError> for Error {
    #[inline]
    fn from(_: StreamCipherError) -> Self {
        Error::CounterExhausted
    }
}
