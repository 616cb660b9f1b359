use core::hash::Hasher as _;

use hashes::fast::{Highway64, hash64_with_key};
use highway::HighwayHash as _;
use proptest::prelude::*;

fn highway_ref(key: [u64; 4], data: &[u8]) -> u64 {
  highway::PortableHash::new(highway::Key(key)).hash64(data)
}

proptest! {
  #[test]
  fn highway64_matches_highway_crate(key in any::<[u64; 4]>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = hash64_with_key(key, &data);
    prop_assert_eq!(ours, highway_ref(key, &data));
  }

  #[test]
  fn streaming_matches_highway_crate(
    key in any::<[u64; 4]>(),
    data in proptest::collection::vec(any::<u8>(), 0..1024),
    chunk in 1usize..80,
  ) {
    let mut h = Highway64::new(key);
    for part in data.chunks(chunk) {
      h.write(part);
    }
    prop_assert_eq!(h.finish(), highway_ref(key, &data));
  }

  #[test]
  fn distinct_keys_give_distinct_digests(a in any::<[u64; 4]>(), b in any::<[u64; 4]>(), data in proptest::collection::vec(any::<u8>(), 0..256)) {
    prop_assume!(a != b);
    prop_assert_ne!(hash64_with_key(a, &data), hash64_with_key(b, &data));
  }
}
