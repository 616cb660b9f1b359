use core::fmt;

use rand::RngCore;

/// Secret HighwayHash key: four 64-bit words.
///
/// `Debug` never prints the words.
#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(C, align(32))]
pub struct HashKey {
  words: [u64; 4],
}

impl HashKey {
  #[inline]
  #[must_use]
  pub const fn new(words: [u64; 4]) -> Self {
    Self { words }
  }

  /// Draw four words from `rng`, in order.
  #[inline]
  #[must_use]
  pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
    Self {
      words: core::array::from_fn(|_| rng.next_u64()),
    }
  }

  #[inline]
  #[must_use]
  pub const fn words(&self) -> [u64; 4] {
    self.words
  }
}

impl From<[u64; 4]> for HashKey {
  #[inline]
  fn from(words: [u64; 4]) -> Self {
    Self::new(words)
  }
}

impl fmt::Debug for HashKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("HashKey(..)")
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::mock::StepRng;

  use super::*;

  #[test]
  fn generate_takes_words_in_order() {
    let key = HashKey::generate(&mut StepRng::new(1, 1));
    assert_eq!(key.words(), [1, 2, 3, 4]);
  }

  #[test]
  fn debug_is_redacted() {
    let key = HashKey::new([0x1234_5678; 4]);
    assert_eq!(format!("{key:?}"), "HashKey(..)");
  }

  #[test]
  fn layout_is_four_aligned_words() {
    assert_eq!(core::mem::size_of::<HashKey>(), 32);
    assert_eq!(core::mem::align_of::<HashKey>(), 32);
  }
}
