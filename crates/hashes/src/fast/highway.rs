//! HighwayHash-64 (**NOT CRYPTO**).
//!
//! HighwayHash is a keyed hash built from 32×32→64-bit multiplies and a byte
//! permutation ("zipper merge") over four 64-bit lanes. It maps naturally onto
//! 256-bit SIMD registers, but every kernel here produces bit-identical
//! digests: the portable kernel is the reference.
//!
//! ```
//! use hashes::fast::{Highway64, hash64_with_key};
//!
//! let key = [1, 2, 3, 4];
//! let one_shot = hash64_with_key(key, b"hello world");
//!
//! let mut h = Highway64::new(key);
//! h.update(b"hello ");
//! h.update(b"world");
//! assert_eq!(h.finalize(), one_shot);
//! ```

#![allow(clippy::indexing_slicing)] // Fixed-size lane arrays and packet parsing

pub mod config;
#[doc(hidden)]
pub mod dispatch;
pub(crate) mod kernels;
#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

pub use config::{HighwayConfig, HighwayForce};
pub use dispatch::{hash64_with_key, kernel_name};

/// HighwayHash key: four 64-bit words.
pub type Key = [u64; 4];

/// Bytes consumed per update round.
pub const PACKET_LEN: usize = 32;

const INIT0: [u64; 4] = [
  0xdbe6_d5d5_fe4c_ce2f,
  0xa409_3822_299f_31d0,
  0x1319_8a2e_0370_7344,
  0x243f_6a88_85a3_08d3,
];

const INIT1: [u64; 4] = [
  0x3bd3_9e10_cb0e_f593,
  0xc0ac_f169_b5f1_8a8c,
  0xbe54_66cf_34e9_0c6c,
  0x4528_21e6_38d0_1377,
];

/// Lays out a trailing partial packet (1..=31 bytes) the way the algorithm
/// expects: whole 4-byte words first, then either the last four input bytes
/// at offset 28 (tail >= 16 bytes) or a 3-byte sample of the final word at
/// offset 16.
#[inline(always)]
pub(crate) fn remainder_packet(tail: &[u8]) -> [u8; PACKET_LEN] {
  debug_assert!(!tail.is_empty() && tail.len() < PACKET_LEN);
  let size_mod32 = tail.len();
  let size_mod4 = size_mod32 & 3;
  let words_len = size_mod32 & !3;

  let mut packet = [0u8; PACKET_LEN];
  packet[..words_len].copy_from_slice(&tail[..words_len]);

  if size_mod32 & 16 != 0 {
    packet[28..32].copy_from_slice(&tail[size_mod32 - 4..size_mod32]);
  } else if size_mod4 != 0 {
    let last = &tail[words_len..];
    packet[16] = last[0];
    packet[17] = last[size_mod4 >> 1];
    packet[18] = last[size_mod4 - 1];
  }
  packet
}

/// Adds `add0`/`add1` lanes derived from a byte shuffle of `(v0, v1)`.
#[inline(always)]
const fn zipper_merge(v1: u64, v0: u64) -> (u64, u64) {
  let add0 = (((v0 & 0xff00_0000) | (v1 & 0xff_0000_0000)) >> 24)
    | (((v0 & 0xff00_0000_0000) | (v1 & 0xff_0000_0000_0000)) >> 16)
    | (v0 & 0xff_0000)
    | ((v0 & 0xff00) << 32)
    | ((v1 & 0xff00_0000_0000_0000) >> 8)
    | (v0 << 56);
  let add1 = (((v1 & 0xff00_0000) | (v0 & 0xff_0000_0000)) >> 24)
    | (v1 & 0xff_0000)
    | ((v1 & 0xff00_0000_0000) >> 16)
    | ((v1 & 0xff00) << 24)
    | ((v0 & 0xff_0000_0000_0000) >> 8)
    | ((v1 & 0xff) << 48)
    | (v0 & 0xff00_0000_0000_0000);
  (add1, add0)
}

/// Portable (scalar) hash state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
  v0: [u64; 4],
  v1: [u64; 4],
  mul0: [u64; 4],
  mul1: [u64; 4],
}

impl State {
  #[inline]
  pub(crate) fn new(key: &Key) -> Self {
    let mut v0 = [0u64; 4];
    let mut v1 = [0u64; 4];
    for i in 0..4 {
      v0[i] = INIT0[i] ^ key[i];
      v1[i] = INIT1[i] ^ key[i].rotate_left(32);
    }
    Self {
      v0,
      v1,
      mul0: INIT0,
      mul1: INIT1,
    }
  }

  #[inline(always)]
  fn update(&mut self, lanes: [u64; 4]) {
    for i in 0..4 {
      self.v1[i] = self.v1[i].wrapping_add(self.mul0[i].wrapping_add(lanes[i]));
      self.mul0[i] ^= (self.v1[i] & 0xffff_ffff).wrapping_mul(self.v0[i] >> 32);
      self.v0[i] = self.v0[i].wrapping_add(self.mul1[i]);
      self.mul1[i] ^= (self.v0[i] & 0xffff_ffff).wrapping_mul(self.v1[i] >> 32);
    }

    for pair in [0, 2] {
      let (add1, add0) = zipper_merge(self.v1[pair + 1], self.v1[pair]);
      self.v0[pair + 1] = self.v0[pair + 1].wrapping_add(add1);
      self.v0[pair] = self.v0[pair].wrapping_add(add0);
    }
    for pair in [0, 2] {
      let (add1, add0) = zipper_merge(self.v0[pair + 1], self.v0[pair]);
      self.v1[pair + 1] = self.v1[pair + 1].wrapping_add(add1);
      self.v1[pair] = self.v1[pair].wrapping_add(add0);
    }
  }

  #[inline(always)]
  pub(crate) fn update_packet(&mut self, packet: &[u8; PACKET_LEN]) {
    let (words, _) = packet.as_chunks::<8>();
    self.update([
      u64::from_le_bytes(words[0]),
      u64::from_le_bytes(words[1]),
      u64::from_le_bytes(words[2]),
      u64::from_le_bytes(words[3]),
    ]);
  }

  /// Folds a trailing partial packet of 1..=31 bytes.
  #[inline]
  pub(crate) fn update_remainder(&mut self, tail: &[u8]) {
    let size = tail.len() as u64;
    for lane in &mut self.v0 {
      *lane = lane.wrapping_add((size << 32).wrapping_add(size));
    }
    let count = size as u32;
    for lane in &mut self.v1 {
      let lo = (*lane as u32).rotate_left(count);
      let hi = ((*lane >> 32) as u32).rotate_left(count);
      *lane = u64::from(lo) | (u64::from(hi) << 32);
    }
    self.update_packet(&remainder_packet(tail));
  }

  #[inline]
  pub(crate) fn finalize64(mut self) -> u64 {
    for _ in 0..4 {
      let v0 = self.v0;
      self.update([
        v0[2].rotate_left(32),
        v0[3].rotate_left(32),
        v0[0].rotate_left(32),
        v0[1].rotate_left(32),
      ]);
    }
    self.v0[0]
      .wrapping_add(self.v1[0])
      .wrapping_add(self.mul0[0])
      .wrapping_add(self.mul1[0])
  }
}

/// Portable kernel: the reference every SIMD kernel must match.
pub(crate) fn hash64_portable(key: Key, data: &[u8]) -> u64 {
  let mut state = State::new(&key);
  let (packets, tail) = data.as_chunks::<PACKET_LEN>();
  for packet in packets {
    state.update_packet(packet);
  }
  if !tail.is_empty() {
    state.update_remainder(tail);
  }
  state.finalize64()
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming
// ─────────────────────────────────────────────────────────────────────────────

/// Incremental HighwayHash-64.
///
/// Any split of the input across [`update`](Self::update) calls produces the
/// same digest as the one-shot [`hash64_with_key`]. Also usable as a
/// [`core::hash::Hasher`].
#[derive(Clone)]
pub struct Highway64 {
  key: Key,
  state: State,
  buf: [u8; PACKET_LEN],
  buf_len: usize,
}

impl Highway64 {
  #[inline]
  #[must_use]
  pub fn new(key: Key) -> Self {
    Self {
      key,
      state: State::new(&key),
      buf: [0u8; PACKET_LEN],
      buf_len: 0,
    }
  }

  /// Absorb `data`.
  pub fn update(&mut self, mut data: &[u8]) {
    if self.buf_len > 0 {
      let take = (PACKET_LEN - self.buf_len).min(data.len());
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&data[..take]);
      self.buf_len += take;
      data = &data[take..];
      if self.buf_len < PACKET_LEN {
        return;
      }
      self.state.update_packet(&self.buf);
      self.buf_len = 0;
    }

    let (packets, tail) = data.as_chunks::<PACKET_LEN>();
    for packet in packets {
      self.state.update_packet(packet);
    }
    self.buf[..tail.len()].copy_from_slice(tail);
    self.buf_len = tail.len();
  }

  /// Digest of everything absorbed so far. Does not consume the state.
  #[must_use]
  pub fn finalize(&self) -> u64 {
    let mut state = self.state;
    if self.buf_len > 0 {
      state.update_remainder(&self.buf[..self.buf_len]);
    }
    state.finalize64()
  }

  /// Forget all absorbed input, keeping the key.
  pub fn reset(&mut self) {
    *self = Self::new(self.key);
  }
}

impl core::hash::Hasher for Highway64 {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.update(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.finalize()
  }
}

impl core::fmt::Debug for Highway64 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // The key and the key-derived state stay out of logs.
    f.debug_struct("Highway64").field("buffered", &self.buf_len).finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;
  use core::hash::Hasher as _;

  use super::*;

  const KEY: Key = [
    0x0706_0504_0302_0100,
    0x0F0E_0D0C_0B0A_0908,
    0x1716_1514_1312_1110,
    0x1F1E_1D1C_1B1A_1918,
  ];

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
  }

  #[test]
  fn empty_input_depends_only_on_key() {
    let a = hash64_portable(KEY, &[]);
    assert_eq!(a, hash64_portable(KEY, &[]));
    assert_ne!(a, hash64_portable([1, 2, 3, 4], &[]));
    assert_eq!(a, 0x907A_56DE_22C2_6E53);
  }

  #[test]
  fn zipper_merge_is_a_byte_permutation() {
    let (add1, add0) = zipper_merge(0x0F0E_0D0C_0B0A_0908, 0x0706_0504_0302_0100);
    assert_eq!(add0, 0x000F_010E_0502_0C03);
    assert_eq!(add1, 0x0708_0609_0D0A_040B);
  }

  #[test]
  fn remainder_packet_layout() {
    let short = remainder_packet(&[10, 11, 12, 13, 14, 15]);
    assert_eq!(&short[..4], &[10, 11, 12, 13]);
    assert_eq!(&short[16..19], &[14, 15, 15]);
    assert!(short[4..16].iter().all(|&b| b == 0));

    let long = pattern(21);
    let packet = remainder_packet(&long);
    assert_eq!(&packet[..20], &long[..20]);
    assert_eq!(&packet[28..], &long[17..21]);
  }

  #[test]
  fn streaming_matches_one_shot_for_every_split() {
    let msg = pattern(200);
    for len in [0usize, 1, 3, 4, 15, 16, 17, 31, 32, 33, 63, 64, 65, 127, 200] {
      let expected = hash64_portable(KEY, &msg[..len]);
      for chunk in [1usize, 5, 31, 32, 33, 64] {
        let mut h = Highway64::new(KEY);
        for part in msg[..len].chunks(chunk) {
          h.update(part);
        }
        assert_eq!(h.finalize(), expected, "len={len} chunk={chunk}");
      }
    }
  }

  #[test]
  fn finalize_does_not_consume() {
    let mut h = Highway64::new(KEY);
    h.update(b"abc");
    let first = h.finalize();
    assert_eq!(h.finalize(), first);
    h.update(b"def");
    assert_eq!(h.finish(), hash64_portable(KEY, b"abcdef"));
  }

  #[test]
  fn reset_restores_fresh_state() {
    let mut h = Highway64::new(KEY);
    h.write(b"some input");
    h.reset();
    assert_eq!(h.finalize(), hash64_portable(KEY, &[]));
  }

  #[test]
  fn debug_hides_key() {
    let s = alloc::format!("{:?}", Highway64::new(KEY));
    assert!(s.starts_with("Highway64"));
    assert!(!s.contains("0706"));
  }
}
