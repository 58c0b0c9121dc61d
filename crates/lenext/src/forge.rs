use hashes::crypto::sha256::{self, DIGEST_LEN, State, build_padding};

use crate::{Error, KeyLengthError};

/// Largest secret length whose bit count fits SHA-256's length field.
pub const MAX_SECRET_LEN: u64 = u64::MAX / 8;

/// Result of a length-extension forgery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Forgery {
  digest: [u8; DIGEST_LEN],
  message: Vec<u8>,
  tail: Vec<u8>,
  secret_len: u64,
}

impl Forgery {
  /// `H(secret ‖ message())`.
  #[inline]
  #[must_use]
  pub const fn digest(&self) -> &[u8; DIGEST_LEN] {
    &self.digest
  }

  /// Lowercase hex of [`digest`](Self::digest).
  #[must_use]
  pub fn digest_hex(&self) -> String {
    State::from_bytes(&self.digest).to_hex()
  }

  /// `known_message ‖ victim padding ‖ appended`, the bytes to submit.
  ///
  /// The secret is not included, and neither is the padding SHA-256 adds
  /// after `appended`: a verifier hashing `secret ‖ message()` derives it.
  #[inline]
  #[must_use]
  pub fn message(&self) -> &[u8] {
    &self.message
  }

  /// The bytes actually compressed on top of the imported state:
  /// `appended` followed by its padding against the whole virtual stream.
  #[inline]
  #[must_use]
  pub fn hashed_tail(&self) -> &[u8] {
    &self.tail
  }

  #[inline]
  #[must_use]
  pub const fn secret_len(&self) -> u64 {
    self.secret_len
  }

  /// `(digest_hex, message)`.
  #[must_use]
  pub fn into_parts(self) -> (String, Vec<u8>) {
    (self.digest_hex(), self.message)
  }
}

/// Extend `known_message` with `appended` under an unknown secret prefix.
///
/// `known_hash_hex` must be `SHA-256(secret ‖ known_message)` for a secret of
/// `secret_len` bytes. Strings are taken as their UTF-8 bytes.
///
/// # Errors
///
/// - [`Error::InvalidKeyLength`] if `secret_len` is negative or exceeds
///   [`MAX_SECRET_LEN`]. Checked first.
/// - [`Error::MalformedDigest`] if `known_hash_hex` is not 64 hex characters.
/// - [`Error::InternalAlignment`] never, unless the padding is broken.
pub fn forge<A, L, M>(appended: A, known_hash_hex: &str, secret_len: L, known_message: M) -> Result<Forgery, Error>
where
  A: AsRef<[u8]>,
  L: TryInto<i128>,
  M: AsRef<[u8]>,
{
  let secret_len = checked_key_length(secret_len)?;
  let state = State::from_hex(known_hash_hex)?;
  let appended = appended.as_ref();

  // Exactly what the victim's hasher appended after `secret ‖ known_message`.
  let mut message = build_padding(known_message.as_ref(), secret_len);

  // `appended` continues the stream right after that padding, so its own
  // padding counts the secret and the whole padded message.
  let tail_prior = secret_len.wrapping_add(message.len() as u64);
  let tail = build_padding(appended, tail_prior);
  let forged = sha256::compress(state, &tail)?;

  message.extend_from_slice(appended);
  Ok(Forgery {
    digest: forged.to_bytes(),
    message,
    tail,
    secret_len,
  })
}

fn checked_key_length<L: TryInto<i128>>(len: L) -> Result<u64, KeyLengthError> {
  let len: i128 = len.try_into().map_err(|_| KeyLengthError::OutOfRange)?;
  if len < 0 {
    return Err(KeyLengthError::Negative);
  }
  u64::try_from(len)
    .ok()
    .filter(|&n| n <= MAX_SECRET_LEN)
    .ok_or(KeyLengthError::OutOfRange)
}

/// Parse a base-10 secret length, as given on a command line.
///
/// Surrounding whitespace and a leading `+` are accepted.
///
/// # Errors
///
/// [`KeyLengthError`] describing why `text` is not a usable length.
pub fn parse_key_length(text: &str) -> Result<u64, KeyLengthError> {
  let text = text.trim();
  if text.is_empty() {
    return Err(KeyLengthError::Empty);
  }

  let (negative, digits) = match text.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, text.strip_prefix('+').unwrap_or(text)),
  };
  if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
    return Err(KeyLengthError::NotAnInteger);
  }
  if negative && digits.bytes().any(|b| b != b'0') {
    return Err(KeyLengthError::Negative);
  }

  digits
    .parse::<u64>()
    .ok()
    .filter(|&n| n <= MAX_SECRET_LEN)
    .ok_or(KeyLengthError::OutOfRange)
}
