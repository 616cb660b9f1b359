use core::{fmt, hash::BuildHasher};

use hashes::fast::Highway64;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::key::HashKey;

/// [`BuildHasher`] producing keyed [`Highway64`] states.
///
/// Pair it with [`ByteEq`](crate::flat::ByteEq) keys to hash flat values by
/// their bytes inside a `HashMap`.
#[derive(Clone)]
pub struct HighwayBuildHasher {
  key: HashKey,
}

impl HighwayBuildHasher {
  /// # Panics
  ///
  /// If the OS entropy source fails.
  #[must_use]
  pub fn new() -> Self {
    Self::with_key(HashKey::generate(&mut ChaCha20Rng::from_entropy()))
  }

  #[inline]
  #[must_use]
  pub const fn with_key(key: HashKey) -> Self {
    Self { key }
  }
}

impl Default for HighwayBuildHasher {
  fn default() -> Self {
    Self::new()
  }
}

impl BuildHasher for HighwayBuildHasher {
  type Hasher = Highway64;

  #[inline]
  fn build_hasher(&self) -> Highway64 {
    Highway64::new(self.key.words())
  }
}

impl fmt::Debug for HighwayBuildHasher {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("HighwayBuildHasher").finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::{HashMap, HashSet};

  use super::*;
  use crate::{flat::ByteEq, keyed::KeyedHasher};

  #[test]
  fn hash_one_matches_keyed_digest() {
    let key = HashKey::new([1, 2, 3, 4]);
    let build = HighwayBuildHasher::with_key(key);
    let keyed = KeyedHasher::with_key(key);
    let value = [0.5f64, -2.0];
    assert_eq!(build.hash_one(ByteEq(value)), keyed.hash64(bytemuck::bytes_of(&value)));
  }

  #[test]
  fn map_keyed_by_flat_values() {
    let mut map = HashMap::with_hasher(HighwayBuildHasher::new());
    map.insert(ByteEq([1u32, 2]), "a");
    map.insert(ByteEq([2u32, 1]), "b");
    map.insert(ByteEq([1u32, 2]), "c");
    assert_eq!(map.len(), 2);
    assert_eq!(map[&ByteEq([1u32, 2])], "c");
  }

  #[test]
  fn negative_zero_is_a_distinct_key() {
    let set: HashSet<_, HighwayBuildHasher> = [ByteEq(0.0f32), ByteEq(-0.0f32)].into_iter().collect();
    assert_eq!(set.len(), 2);
  }
}
