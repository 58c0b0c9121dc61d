//! Diagnostics for a forgery.
//!
//! Nothing here affects [`forge`](crate::forge); it derives the same lengths
//! from [`padding_len`] so a caller can print how the forged stream is laid
//! out. An off-by-one secret length shows up here as a different
//! `tail_prior_len` long before it shows up as a digest that never verifies.

use core::fmt;

use hashes::crypto::sha256::{BLOCK_LEN, padding_len};

/// Layout of `secret ‖ known ‖ victim padding ‖ appended ‖ tail padding`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ForgeDiag {
  pub secret_len: u64,
  pub known_len: usize,
  pub appended_len: usize,
  /// Bytes the victim's hasher appended after `secret ‖ known`.
  pub victim_padding_len: usize,
  /// `known_len + victim_padding_len`.
  pub victim_padded_len: usize,
  /// Bytes absorbed before the appended data: `secret_len + victim_padded_len`.
  pub tail_prior_len: u64,
  /// `appended_len` plus its padding.
  pub tail_len: usize,
  /// Blocks compressed on top of the imported state.
  pub blocks: usize,
  /// Length field written into the last block.
  pub total_bits: u64,
}

/// Describe the forgery `forge(appended, _, secret_len, known)` would perform.
#[must_use]
pub fn diagnose(secret_len: u64, known_len: usize, appended_len: usize) -> ForgeDiag {
  let victim_padding_len = padding_len(secret_len.wrapping_add(known_len as u64));
  let victim_padded_len = known_len + victim_padding_len;
  let tail_prior_len = secret_len.wrapping_add(victim_padded_len as u64);
  let total = tail_prior_len.wrapping_add(appended_len as u64);
  let tail_len = appended_len + padding_len(total);

  ForgeDiag {
    secret_len,
    known_len,
    appended_len,
    victim_padding_len,
    victim_padded_len,
    tail_prior_len,
    tail_len,
    blocks: tail_len / BLOCK_LEN,
    total_bits: total.wrapping_mul(8),
  }
}

impl fmt::Display for ForgeDiag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "secret_len:         {}", self.secret_len)?;
    writeln!(f, "known_len:          {}", self.known_len)?;
    writeln!(f, "victim_padding_len: {}", self.victim_padding_len)?;
    writeln!(f, "victim_padded_len:  {}", self.victim_padded_len)?;
    writeln!(f, "tail_prior_len:     {}", self.tail_prior_len)?;
    writeln!(f, "appended_len:       {}", self.appended_len)?;
    writeln!(f, "tail_len:           {}", self.tail_len)?;
    writeln!(f, "blocks:             {}", self.blocks)?;
    write!(f, "total_bits:         {}", self.total_bits)
  }
}
