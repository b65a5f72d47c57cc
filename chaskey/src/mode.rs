//! Modes of operation.

use crate::{ChaskeyCtr, Error, new_ctr};
use core::{fmt, str::FromStr};

/// Mode of operation built on the Chaskey-LTS block cipher.
///
/// Only counter mode is implemented. Parsing any other name (`"ecb"`,
/// `"cbc"`, `"gcm"`, ...) fails with [`Error::UnsupportedMode`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Mode {
    /// Counter mode: keystream is `E_K(nonce + i)` for block index `i`.
    #[default]
    Ctr,
}

impl Mode {
    /// Lowercase name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Ctr => "ctr",
        }
    }

    /// Start a keystream session in this mode.
    ///
    /// # Errors
    /// [`Error::InvalidKeyLength`] if `key` is not 16 bytes and
    /// [`Error::InvalidNonceLength`] if `nonce` is longer than 16 bytes.
    pub fn keystream(self, key: &[u8], nonce: &[u8]) -> Result<ChaskeyCtr, Error> {
        match self {
            Mode::Ctr => new_ctr(key, nonce),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.eq_ignore_ascii_case("ctr") {
            Ok(Mode::Ctr)
        } else {
            Err(Error::UnsupportedMode)
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
