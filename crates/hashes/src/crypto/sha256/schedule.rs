//! Message schedule expansion.
#![allow(clippy::indexing_slicing)] // Fixed 64-word schedule, indices bounded by the loop range

use super::BLOCK_LEN;
use crate::util::rotr32;

/// Words in one block's message schedule (one per round).
pub const SCHEDULE_LEN: usize = 64;

#[inline(always)]
fn small_sigma0(x: u32) -> u32 {
  rotr32(x, 7) ^ rotr32(x, 18) ^ (x >> 3)
}

#[inline(always)]
fn small_sigma1(x: u32) -> u32 {
  rotr32(x, 17) ^ rotr32(x, 19) ^ (x >> 10)
}

/// Expand one block into the 64-word schedule consumed by the rounds.
///
/// Words `0..16` are the block read as big-endian `u32`s; the rest are
/// derived from earlier words.
#[must_use]
pub fn expand(block: &[u8; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
  let mut w = [0u32; SCHEDULE_LEN];

  let (words, _) = block.as_chunks::<4>();
  for (slot, bytes) in w.iter_mut().zip(words) {
    *slot = u32::from_be_bytes(*bytes);
  }

  for t in 16..SCHEDULE_LEN {
    w[t] = small_sigma1(w[t - 2])
      .wrapping_add(w[t - 7])
      .wrapping_add(small_sigma0(w[t - 15]))
      .wrapping_add(w[t - 16]);
  }
  w
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::crypto::sha256::build_padding;

  #[test]
  fn abc_block_schedule() {
    // FIPS 180-4 example: one-block message "abc".
    let padded = build_padding(b"abc", 0);
    let block: &[u8; BLOCK_LEN] = padded.as_slice().try_into().unwrap();
    let w = expand(block);

    assert_eq!(w[0], 0x61626380);
    assert!(w[1..15].iter().all(|&x| x == 0));
    assert_eq!(w[15], 0x18);
    assert_eq!(&w[16..20], &[0x61626380, 0x000f0000, 0x7da86405, 0x600003c6]);
    assert_eq!(w[63], 0x12b1edeb);
  }

  #[test]
  fn zero_block_stays_zero() {
    assert_eq!(expand(&[0u8; BLOCK_LEN]), [0u32; SCHEDULE_LEN]);
  }

  #[test]
  fn derived_words_wrap_instead_of_overflowing() {
    let w = expand(&[0xff; BLOCK_LEN]);
    // Every input word is u32::MAX; the derived ones are sums that must wrap.
    assert!(w[..16].iter().all(|&x| x == u32::MAX));
    let expected =
      small_sigma1(u32::MAX).wrapping_add(u32::MAX).wrapping_add(small_sigma0(u32::MAX)).wrapping_add(u32::MAX);
    assert_eq!(w[16], expected);
  }
}
