//! Reduction of a 64-bit digest to a smaller word.

/// Reduce `digest` modulo `2^bits`. `bits >= 64` is the identity.
///
/// The modulus is a power of two, so this keeps the low `bits` bits and a
/// uniform digest stays uniform.
#[inline]
#[must_use]
pub const fn narrow_bits(digest: u64, bits: u32) -> u64 {
  if bits >= u64::BITS {
    digest
  } else {
    digest % (1u64 << bits)
  }
}

/// Reduce `digest` modulo `usize::MAX + 1`. Identity on 64-bit targets.
#[inline]
#[must_use]
pub const fn narrow(digest: u64) -> usize {
  narrow_bits(digest, usize::BITS) as usize
}
