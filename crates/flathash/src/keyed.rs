//! Keyed HighwayHash-64 over byte buffers.

use core::fmt;

use hashes::fast::{Highway64, hash64_with_key, highway::kernel_name};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::key::HashKey;

/// Owns one [`HashKey`] and the generator that produced it.
///
/// `hash64` borrows immutably and `reset_key` mutably, so a key can never
/// change under an in-flight hash.
pub struct KeyedHasher<R = ChaCha20Rng> {
  key: HashKey,
  rng: R,
}

impl KeyedHasher<ChaCha20Rng> {
  /// Random key from a ChaCha20 generator seeded once by the OS.
  ///
  /// # Panics
  ///
  /// If the OS entropy source fails. There is no fallback.
  #[must_use]
  pub fn new() -> Self {
    Self::from_rng(ChaCha20Rng::from_entropy())
  }

  /// Explicit key. The generator is still seeded for later [`reset_key`](Self::reset_key).
  ///
  /// # Panics
  ///
  /// If the OS entropy source fails.
  #[must_use]
  pub fn with_key(key: HashKey) -> Self {
    Self::with_key_and_rng(key, ChaCha20Rng::from_entropy())
  }
}

impl Default for KeyedHasher<ChaCha20Rng> {
  fn default() -> Self {
    Self::new()
  }
}

impl<R: RngCore> KeyedHasher<R> {
  /// Key drawn from `rng`, which is kept for later regeneration.
  #[must_use]
  pub fn from_rng(mut rng: R) -> Self {
    let key = HashKey::generate(&mut rng);
    Self::with_key_and_rng(key, rng)
  }

  #[must_use]
  pub fn with_key_and_rng(key: HashKey, rng: R) -> Self {
    debug!(kernel = kernel_name(), "keyed hasher created");
    Self { key, rng }
  }

  /// Draw a fresh key. Digests computed earlier are unaffected.
  pub fn reset_key(&mut self) {
    self.key = HashKey::generate(&mut self.rng);
    debug!("hash key regenerated");
  }

  /// HighwayHash-64 of `bytes` under the current key.
  ///
  /// Every kernel returns the same digest. Empty input still yields a
  /// key-dependent digest.
  #[inline]
  #[must_use]
  pub fn hash64(&self, bytes: &[u8]) -> u64 {
    hash64_with_key(self.key.words(), bytes)
  }

  /// Incremental state under the current key.
  #[inline]
  #[must_use]
  pub fn streaming(&self) -> Highway64 {
    Highway64::new(self.key.words())
  }

  #[inline]
  #[must_use]
  pub fn key(&self) -> &HashKey {
    &self.key
  }
}

impl<R> fmt::Debug for KeyedHasher<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("KeyedHasher")
      .field("kernel", &kernel_name())
      .finish_non_exhaustive()
  }
}
