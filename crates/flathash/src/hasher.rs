//! Hashing of whole flat values.

use core::{fmt, marker::PhantomData};

use rand::RngCore;
use rand_chacha::ChaCha20Rng;

use crate::{
  flat::{Flat, bytes_of},
  key::HashKey,
  keyed::KeyedHasher,
  narrow::narrow,
};

/// Hashes values of one flat type `T` under a private key.
///
/// `hash` is a pure function of the key and the value's bytes, so values
/// with identical byte views always hash equally.
///
/// ```
/// use bytemuck::{Pod, Zeroable};
/// use flathash::{HashKey, ValueHasher};
///
/// #[derive(Clone, Copy, Pod, Zeroable)]
/// #[repr(C)]
/// struct Point {
///   x: i32,
///   y: i32,
/// }
///
/// let hasher = ValueHasher::<Point>::with_key(HashKey::new([1, 2, 3, 4]));
/// let p = Point { x: 3, y: -7 };
/// assert_eq!(hasher.hash(&p), hasher.hash(&Point { x: 3, y: -7 }));
/// ```
pub struct ValueHasher<T, R = ChaCha20Rng> {
  keyed: KeyedHasher<R>,
  _value: PhantomData<fn(&T)>,
}

impl<T: Flat> ValueHasher<T, ChaCha20Rng> {
  /// # Panics
  ///
  /// If the OS entropy source fails.
  #[must_use]
  pub fn new() -> Self {
    Self::from_keyed(KeyedHasher::new())
  }

  /// # Panics
  ///
  /// If the OS entropy source fails.
  #[must_use]
  pub fn with_key(key: HashKey) -> Self {
    Self::from_keyed(KeyedHasher::with_key(key))
  }
}

impl<T: Flat> Default for ValueHasher<T, ChaCha20Rng> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Flat, R: RngCore> ValueHasher<T, R> {
  #[must_use]
  pub fn from_rng(rng: R) -> Self {
    Self::from_keyed(KeyedHasher::from_rng(rng))
  }

  #[inline]
  #[must_use]
  pub fn from_keyed(keyed: KeyedHasher<R>) -> Self {
    Self {
      keyed,
      _value: PhantomData,
    }
  }

  /// Hash result: the digest narrowed to `usize`.
  #[inline]
  #[must_use]
  pub fn hash(&self, value: &T) -> usize {
    narrow(self.hash64(value))
  }

  /// Full 64-bit digest of the value's bytes.
  #[inline]
  #[must_use]
  pub fn hash64(&self, value: &T) -> u64 {
    self.keyed.hash64(bytes_of(value))
  }

  pub fn reset_key(&mut self) {
    self.keyed.reset_key();
  }

  #[inline]
  #[must_use]
  pub fn keyed(&self) -> &KeyedHasher<R> {
    &self.keyed
  }
}

impl<T, R> fmt::Debug for ValueHasher<T, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ValueHasher")
      .field("value", &core::any::type_name::<T>())
      .field("keyed", &self.keyed)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::mock::StepRng;

  use super::*;

  #[test]
  fn hash_is_narrowed_digest() {
    let h = ValueHasher::<u64, _>::from_rng(StepRng::new(1, 1));
    assert_eq!(h.hash(&42), narrow(h.hash64(&42)));
    assert_eq!(h.hash64(&42), h.keyed().hash64(&42u64.to_ne_bytes()));
  }

  #[test]
  fn equal_bytes_hash_equally() {
    let h = ValueHasher::<[u8; 3], _>::from_rng(StepRng::new(7, 3));
    assert_eq!(h.hash(&[1, 2, 3]), h.hash(&[1, 2, 3]));
    assert_ne!(h.hash(&[1, 2, 3]), h.hash(&[3, 2, 1]));
  }

  #[test]
  fn zero_sized_value_hashes_like_empty_input() {
    let h = ValueHasher::<(), _>::from_rng(StepRng::new(1, 1));
    assert_eq!(h.hash64(&()), h.keyed().hash64(&[]));
  }

  #[test]
  fn debug_names_value_type() {
    let h = ValueHasher::<u32, _>::from_rng(StepRng::new(1, 1));
    assert!(format!("{h:?}").contains("u32"));
  }
}
