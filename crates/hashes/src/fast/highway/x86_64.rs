//! x86_64 AVX2 HighwayHash-64 kernel.
//!
//! The four 64-bit lanes of each state vector live in one `__m256i`, so a
//! packet update is a handful of 256-bit instructions.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::x86_64::{
  __m256i, _mm_cvtsi32_si128, _mm_cvtsi128_si64, _mm256_add_epi64, _mm256_castsi256_si128, _mm256_loadu_si256,
  _mm256_mul_epu32, _mm256_or_si256, _mm256_permute4x64_epi64, _mm256_set_epi64x, _mm256_set1_epi64x,
  _mm256_shuffle_epi8, _mm256_shuffle_epi32, _mm256_sll_epi32, _mm256_srl_epi32, _mm256_srli_epi64,
  _mm256_xor_si256,
};

use super::{INIT0, INIT1, Key, PACKET_LEN, remainder_packet};

/// Swaps the 32-bit halves of every 64-bit lane.
const SWAP_HALVES: i32 = 0b10_11_00_01;
/// Lane order `[2, 3, 0, 1]`.
const SWAP_PAIRS: i32 = 0b01_00_11_10;

struct State {
  v0: __m256i,
  v1: __m256i,
  mul0: __m256i,
  mul1: __m256i,
}

#[inline]
#[target_feature(enable = "avx2")]
fn load_words(words: &[u64; 4]) -> __m256i {
  // SAFETY: `words` is 32 readable bytes; the load is unaligned.
  unsafe { _mm256_loadu_si256(words.as_ptr().cast()) }
}

#[inline]
#[target_feature(enable = "avx2")]
fn load_packet(packet: &[u8; PACKET_LEN]) -> __m256i {
  // SAFETY: `packet` is 32 readable bytes; the load is unaligned.
  unsafe { _mm256_loadu_si256(packet.as_ptr().cast()) }
}

#[inline]
#[target_feature(enable = "avx2")]
fn zipper_merge(v: __m256i) -> __m256i {
  let mask = _mm256_set_epi64x(
    0x0708_0609_0D0A_040B,
    0x000F_010E_0502_0C03,
    0x0708_0609_0D0A_040B,
    0x000F_010E_0502_0C03,
  );
  _mm256_shuffle_epi8(v, mask)
}

impl State {
  #[inline]
  #[target_feature(enable = "avx2")]
  fn new(key: &Key) -> Self {
    let key = load_words(key);
    let mul0 = load_words(&INIT0);
    let mul1 = load_words(&INIT1);
    Self {
      v0: _mm256_xor_si256(mul0, key),
      v1: _mm256_xor_si256(mul1, _mm256_shuffle_epi32::<SWAP_HALVES>(key)),
      mul0,
      mul1,
    }
  }

  #[inline]
  #[target_feature(enable = "avx2")]
  fn update(&mut self, packet: __m256i) {
    self.v1 = _mm256_add_epi64(self.v1, _mm256_add_epi64(self.mul0, packet));
    self.mul0 = _mm256_xor_si256(self.mul0, _mm256_mul_epu32(self.v1, _mm256_srli_epi64::<32>(self.v0)));
    self.v0 = _mm256_add_epi64(self.v0, self.mul1);
    self.mul1 = _mm256_xor_si256(self.mul1, _mm256_mul_epu32(self.v0, _mm256_srli_epi64::<32>(self.v1)));
    self.v0 = _mm256_add_epi64(self.v0, zipper_merge(self.v1));
    self.v1 = _mm256_add_epi64(self.v1, zipper_merge(self.v0));
  }

  #[inline]
  #[target_feature(enable = "avx2")]
  fn update_remainder(&mut self, tail: &[u8]) {
    let size = tail.len() as u64;
    self.v0 = _mm256_add_epi64(self.v0, _mm256_set1_epi64x(((size << 32) + size) as i64));

    let count = size as i32;
    let left = _mm256_sll_epi32(self.v1, _mm_cvtsi32_si128(count));
    let right = _mm256_srl_epi32(self.v1, _mm_cvtsi32_si128(32 - count));
    self.v1 = _mm256_or_si256(left, right);

    self.update(load_packet(&remainder_packet(tail)));
  }

  #[inline]
  #[target_feature(enable = "avx2")]
  fn finalize64(mut self) -> u64 {
    for _ in 0..4 {
      let permuted = _mm256_shuffle_epi32::<SWAP_HALVES>(_mm256_permute4x64_epi64::<SWAP_PAIRS>(self.v0));
      self.update(permuted);
    }
    let sum = _mm256_add_epi64(
      _mm256_add_epi64(self.v0, self.v1),
      _mm256_add_epi64(self.mul0, self.mul1),
    );
    _mm_cvtsi128_si64(_mm256_castsi256_si128(sum)) as u64
  }
}

#[target_feature(enable = "avx2")]
fn hash64_avx2_impl(key: &Key, data: &[u8]) -> u64 {
  let mut state = State::new(key);
  let (packets, tail) = data.as_chunks::<PACKET_LEN>();
  for packet in packets {
    state.update(load_packet(packet));
  }
  if !tail.is_empty() {
    state.update_remainder(tail);
  }
  state.finalize64()
}

/// AVX2 kernel entry point.
#[inline]
pub(crate) fn hash64_avx2(key: Key, data: &[u8]) -> u64 {
  // SAFETY: dispatch selects this kernel only when `x86::AVX2_READY` is
  // present in the detected caps.
  unsafe { hash64_avx2_impl(&key, data) }
}
