//! Chaining state and its digest encodings.
//!
//! A SHA-256 digest is nothing more than the final chaining state written out
//! big-endian, so a published digest can be read back into a [`State`] and
//! compression can continue from it.

use alloc::string::{String, ToString};
use core::{fmt, str::FromStr};

use super::DIGEST_LEN;

/// Length of a hex-encoded digest in characters.
pub const HEX_LEN: usize = 2 * DIGEST_LEN;

/// SHA-256 chaining value `h0..h7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct State([u32; 8]);

impl State {
  /// FIPS 180-4 initialization vector.
  pub const INITIAL: Self = Self([
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
  ]);

  #[inline]
  #[must_use]
  pub const fn from_words(words: [u32; 8]) -> Self {
    Self(words)
  }

  #[inline]
  #[must_use]
  pub const fn into_words(self) -> [u32; 8] {
    self.0
  }

  /// Read a state from its 32-byte big-endian digest form.
  #[must_use]
  pub fn from_bytes(bytes: &[u8; DIGEST_LEN]) -> Self {
    let mut words = [0u32; 8];
    let (chunks, _) = bytes.as_chunks::<4>();
    for (word, chunk) in words.iter_mut().zip(chunks) {
      *word = u32::from_be_bytes(*chunk);
    }
    Self(words)
  }

  /// Canonical digest bytes: the eight words, big-endian, in order.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    let (chunks, _) = out.as_chunks_mut::<4>();
    for (chunk, word) in chunks.iter_mut().zip(self.0) {
      *chunk = word.to_be_bytes();
    }
    out
  }

  /// Parse a 64-character hex digest. Both letter cases are accepted.
  ///
  /// # Errors
  ///
  /// [`MalformedDigest::Length`] if `hex` is not exactly [`HEX_LEN`] bytes,
  /// [`MalformedDigest::NonHex`] at the first byte outside `[0-9a-fA-F]`.
  pub fn from_hex(hex: &str) -> Result<Self, MalformedDigest> {
    let bytes = hex.as_bytes();
    if bytes.len() != HEX_LEN {
      return Err(MalformedDigest::Length { found: bytes.len() });
    }

    let mut words = [0u32; 8];
    let (groups, _) = bytes.as_chunks::<8>();
    for (i, (word, group)) in words.iter_mut().zip(groups).enumerate() {
      let mut acc = 0u32;
      for (j, &c) in group.iter().enumerate() {
        let Some(nibble) = nibble(c) else {
          return Err(MalformedDigest::NonHex { index: i * 8 + j });
        };
        acc = (acc << 4) | u32::from(nibble);
      }
      *word = acc;
    }
    Ok(Self(words))
  }

  /// Lowercase 64-character hex digest.
  #[must_use]
  pub fn to_hex(&self) -> String {
    self.to_string()
  }
}

#[inline]
const fn nibble(c: u8) -> Option<u8> {
  match c {
    b'0'..=b'9' => Some(c - b'0'),
    b'a'..=b'f' => Some(c - b'a' + 10),
    b'A'..=b'F' => Some(c - b'A' + 10),
    _ => None,
  }
}

impl fmt::Display for State {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for word in self.0 {
      write!(f, "{word:08x}")?;
    }
    Ok(())
  }
}

impl FromStr for State {
  type Err = MalformedDigest;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_hex(s)
  }
}

impl From<[u8; DIGEST_LEN]> for State {
  #[inline]
  fn from(bytes: [u8; DIGEST_LEN]) -> Self {
    Self::from_bytes(&bytes)
  }
}

/// A hex digest that could not be read back into a [`State`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MalformedDigest {
  /// Input was not [`HEX_LEN`] bytes long.
  Length { found: usize },
  /// Byte at `index` is not a hex digit.
  NonHex { index: usize },
}

impl fmt::Display for MalformedDigest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Length { found } => write!(f, "expected {HEX_LEN} hex characters, found {found} bytes"),
      Self::NonHex { index } => write!(f, "non-hex character at offset {index}"),
    }
  }
}

impl core::error::Error for MalformedDigest {}
