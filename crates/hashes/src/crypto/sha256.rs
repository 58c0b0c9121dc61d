#![allow(clippy::indexing_slicing)] // Fixed-size arrays + compression rounds

use core::fmt;

use crate::util::rotr32;

pub mod padding;
pub mod schedule;
mod state;


pub use padding::{build_padding, padding_len};
pub use schedule::expand;
pub use state::{HEX_LEN, MalformedDigest, State};

/// Compression block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Digest size in bytes.
pub const DIGEST_LEN: usize = 32;

const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[inline(always)]
fn ch(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (!x & z)
}

#[inline(always)]
fn maj(x: u32, y: u32, z: u32) -> u32 {
  (x & y) ^ (x & z) ^ (y & z)
}

#[inline(always)]
fn big_sigma0(x: u32) -> u32 {
  rotr32(x, 2) ^ rotr32(x, 13) ^ rotr32(x, 22)
}

#[inline(always)]
fn big_sigma1(x: u32) -> u32 {
  rotr32(x, 6) ^ rotr32(x, 11) ^ rotr32(x, 25)
}

/// Compression input was not a whole number of 64-byte blocks.
///
/// Padding built by [`build_padding`] against a block-aligned prior length is
/// always aligned, so seeing this error means the caller padded against the
/// wrong prior length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AlignmentError {
  input_len: usize,
}

impl AlignmentError {
  /// Length in bytes of the rejected input.
  #[inline]
  #[must_use]
  pub const fn input_len(&self) -> usize {
    self.input_len
  }
}

impl fmt::Display for AlignmentError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "compression input of {} bytes is not a multiple of {BLOCK_LEN}",
      self.input_len
    )
  }
}

impl core::error::Error for AlignmentError {}

#[inline]
fn compress_block(state: &mut [u32; 8], block: &[u8; BLOCK_LEN]) {
  let w = schedule::expand(block);

  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (&k, &wt) in K.iter().zip(w.iter()) {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(ch(e, f, g))
      .wrapping_add(k)
      .wrapping_add(wt);
    let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  for (word, reg) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
    *word = word.wrapping_add(reg);
  }
}

/// Run the compression function over `blocks` in order, starting at `state`.
#[must_use]
pub fn compress_blocks(state: State, blocks: &[[u8; BLOCK_LEN]]) -> State {
  let mut words = state.into_words();
  for block in blocks {
    compress_block(&mut words, block);
  }
  State::from_words(words)
}

/// Slice `data` into blocks and compress them on top of `state`.
///
/// # Errors
///
/// Returns [`AlignmentError`] if `data.len()` is not a multiple of
/// [`BLOCK_LEN`]. No block is compressed in that case.
pub fn compress(state: State, data: &[u8]) -> Result<State, AlignmentError> {
  let (blocks, rest) = data.as_chunks::<BLOCK_LEN>();
  if !rest.is_empty() {
    return Err(AlignmentError { input_len: data.len() });
  }
  Ok(compress_blocks(state, blocks))
}

/// Plain SHA-256, computed from the initialization vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl Sha256 {
  /// Compute the digest of `data` in one shot.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let padded = build_padding(data, 0);
    let (blocks, rest) = padded.as_chunks::<BLOCK_LEN>();
    debug_assert!(rest.is_empty());
    compress_blocks(State::INITIAL, blocks).to_bytes()
  }
}
