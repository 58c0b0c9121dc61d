//! Error types for forging.

use core::fmt;

use hashes::crypto::{AlignmentError, MalformedDigest};

/// Why a secret length was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyLengthError {
  /// No digits were given.
  Empty,
  /// The length was negative.
  Negative,
  /// The text is not a base-10 integer.
  NotAnInteger,
  /// The length does not fit SHA-256's 64-bit length field.
  OutOfRange,
}

impl fmt::Display for KeyLengthError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::Empty => "empty",
      Self::Negative => "negative",
      Self::NotAnInteger => "not an integer",
      Self::OutOfRange => "out of range",
    })
  }
}

impl core::error::Error for KeyLengthError {}

/// Error returned by [`forge`](crate::forge).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  /// The known hash is not a 64-character hex digest.
  MalformedDigest(MalformedDigest),
  /// The secret length is not a usable non-negative integer.
  InvalidKeyLength(KeyLengthError),
  /// The padded tail was not block aligned. Indicates a bug, never bad input.
  InternalAlignment(AlignmentError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MalformedDigest(err) => write!(f, "malformed digest: {err}"),
      Self::InvalidKeyLength(err) => write!(f, "invalid key length: {err}"),
      Self::InternalAlignment(err) => write!(f, "internal alignment error: {err}"),
    }
  }
}

impl core::error::Error for Error {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::MalformedDigest(err) => Some(err),
      Self::InvalidKeyLength(err) => Some(err),
      Self::InternalAlignment(err) => Some(err),
    }
  }
}

impl From<MalformedDigest> for Error {
  #[inline]
  fn from(err: MalformedDigest) -> Self {
    Self::MalformedDigest(err)
  }
}

impl From<KeyLengthError> for Error {
  #[inline]
  fn from(err: KeyLengthError) -> Self {
    Self::InvalidKeyLength(err)
  }
}

impl From<AlignmentError> for Error {
  #[inline]
  fn from(err: AlignmentError) -> Self {
    Self::InternalAlignment(err)
  }
}

#[cfg(test)]
mod tests {
  use core::error::Error as _;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      Error::from(MalformedDigest::Length { found: 63 }).to_string(),
      "malformed digest: expected 64 hex characters, found 63 bytes"
    );
    assert_eq!(
      Error::from(KeyLengthError::Negative).to_string(),
      "invalid key length: negative"
    );
  }

  #[test]
  fn source_is_the_wrapped_error() {
    let err = Error::from(KeyLengthError::NotAnInteger);
    let source = err.source().expect("wrapped error is exposed");
    assert_eq!(source.to_string(), "not an integer");

    let err = Error::from(MalformedDigest::NonHex { index: 3 });
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("non-hex character at offset 3"));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<KeyLengthError>();
  }
}
