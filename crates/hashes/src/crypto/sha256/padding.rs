//! Merkle–Damgård padding.
//!
//! SHA-256 closes its input with a single `0x80` byte, a run of zeros, and the
//! length of the whole absorbed stream in bits as a big-endian `u64`. The zero
//! run is sized against everything absorbed so far, not only the bytes being
//! padded here: a caller resuming from an imported state passes the number of
//! bytes the original hasher had already consumed as `prior_len`.

use alloc::vec::Vec;

use super::BLOCK_LEN;

const LEN_FIELD: usize = 8;

/// Number of bytes SHA-256 appends after `total_absorbed` input bytes.
///
/// Always in `9..=72`: the `0x80` marker, `0..=63` zeros, the length field.
#[inline]
#[must_use]
pub const fn padding_len(total_absorbed: u64) -> usize {
  let rem = (total_absorbed % BLOCK_LEN as u64) as usize;
  let zeros = (2 * BLOCK_LEN - LEN_FIELD - 1 - rem) % BLOCK_LEN;
  1 + zeros + LEN_FIELD
}

/// Return `message` followed by the padding SHA-256 appends when `message`
/// ends a stream that had already absorbed `prior_len` bytes.
///
/// `prior_len + output.len()` is always a multiple of [`BLOCK_LEN`], and the
/// last eight bytes encode `8 * (prior_len + message.len())` modulo 2^64.
#[must_use]
pub fn build_padding(message: &[u8], prior_len: u64) -> Vec<u8> {
  let total = prior_len.wrapping_add(message.len() as u64);
  let bit_len = total.wrapping_mul(8);
  let padded_len = message.len() + padding_len(total);

  let mut out = Vec::with_capacity(padded_len);
  out.extend_from_slice(message);
  out.push(0x80);
  out.resize(padded_len - LEN_FIELD, 0);
  out.extend_from_slice(&bit_len.to_be_bytes());
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn length_field(padded: &[u8]) -> u64 {
    let tail: [u8; 8] = padded[padded.len() - 8..].try_into().unwrap();
    u64::from_be_bytes(tail)
  }

  #[test]
  fn empty_message_fills_one_block() {
    let padded = build_padding(b"", 0);
    assert_eq!(padded.len(), 64);
    assert_eq!(padded[0], 0x80);
    assert!(padded[1..].iter().all(|&b| b == 0));
  }

  #[test]
  fn length_field_spills_into_next_block() {
    // 55 bytes leave exactly room for the marker and the length field.
    assert_eq!(build_padding(&[b'x'; 55], 0).len(), 64);
    assert_eq!(build_padding(&[b'x'; 56], 0).len(), 128);
    assert_eq!(build_padding(&[b'x'; 64], 0).len(), 128);
  }

  #[test]
  fn padding_len_bounds() {
    assert_eq!(padding_len(55), 9);
    assert_eq!(padding_len(56), 72);
    assert_eq!(padding_len(0), 64);
    for total in 0..256u64 {
      let len = padding_len(total);
      assert!((9..=72).contains(&len), "total={total} len={len}");
      assert_eq!((total as usize + len) % BLOCK_LEN, 0);
    }
  }

  #[test]
  fn prior_length_sizes_the_zero_run() {
    for prior in [0u64, 1, 6, 55, 56, 63, 64, 65, 1000] {
      for len in [0usize, 1, 10, 55, 56, 64, 100] {
        let msg: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let padded = build_padding(&msg, prior);
        assert_eq!((prior as usize + padded.len()) % BLOCK_LEN, 0, "prior={prior} len={len}");
        assert_eq!(&padded[..len], &msg[..]);
        assert_eq!(padded[len], 0x80);
        assert_eq!(length_field(&padded), 8 * (prior + len as u64));
      }
    }
  }

  #[test]
  fn keyed_message_padding() {
    // `user=guest` behind a 6-byte secret: 16 absorbed bytes, 128 bits.
    let padded = build_padding(b"user=guest", 6);
    assert_eq!(padded.len(), 58);
    assert_eq!(length_field(&padded), 128);
    assert!(padded[11..50].iter().all(|&b| b == 0));
  }

  #[test]
  fn bit_length_wraps_modulo_2_64() {
    let padded = build_padding(b"", u64::MAX / 8 + 1);
    assert_eq!(length_field(&padded), 0);
  }
}
