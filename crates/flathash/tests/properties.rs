use flathash::{HashKey, ValueHasher, flat, narrow, narrow_bits};
use proptest::prelude::*;

mod common;

use common::{NAME_LEN, Record};

fn record() -> impl Strategy<Value = Record> {
  (any::<i32>(), any::<f64>(), any::<[u8; NAME_LEN]>()).prop_map(|(id, value, name)| Record { value, id, name })
}

fn named_record() -> impl Strategy<Value = Record> {
  (any::<i32>(), any::<f64>(), "[a-zA-Z ]{0,30}").prop_map(|(id, value, name)| Record::new(id, value, &name))
}

proptest! {
  #[test]
  fn hashing_is_deterministic(key in any::<[u64; 4]>(), r in record()) {
    let a = ValueHasher::<Record>::with_key(HashKey::new(key));
    let b = ValueHasher::<Record>::with_key(HashKey::new(key));
    prop_assert_eq!(a.hash(&r), a.hash(&r));
    prop_assert_eq!(a.hash(&r), b.hash(&r));
  }

  #[test]
  fn different_keys_give_different_digests(ka in any::<[u64; 4]>(), kb in any::<[u64; 4]>(), r in record()) {
    prop_assume!(ka != kb);
    let a = ValueHasher::<Record>::with_key(HashKey::new(ka));
    let b = ValueHasher::<Record>::with_key(HashKey::new(kb));
    prop_assert_ne!(a.hash64(&r), b.hash64(&r));
  }

  #[test]
  fn equality_follows_bytes_and_implies_equal_hashes(a in named_record(), b in named_record(), copy in any::<bool>()) {
    let b = if copy { a } else { b };
    let hasher = ValueHasher::<Record>::with_key(HashKey::new([1, 2, 3, 4]));
    prop_assert_eq!(flat::equals(&a, &b), flat::bytes_of(&a) == flat::bytes_of(&b));
    prop_assert_eq!(flat::not_equals(&a, &b), !flat::equals(&a, &b));
    if flat::equals(&a, &b) {
      prop_assert_eq!(hasher.hash(&a), hasher.hash(&b));
    }
  }

  #[test]
  fn bytes_round_trip(r in record()) {
    let bytes = flat::to_bytes(&r);
    prop_assert_eq!(bytes.len(), size_of::<Record>());
    let back: Record = flat::from_bytes(&bytes).unwrap();
    prop_assert_eq!(flat::bytes_of(&back), flat::bytes_of(&r));
  }

  #[test]
  fn wrong_lengths_are_rejected(len in 0usize..100) {
    prop_assume!(len != size_of::<Record>());
    let bytes = vec![0u8; len];
    prop_assert!(flat::from_bytes::<Record>(&bytes).is_err());
  }

  #[test]
  fn empty_values_hash_by_key(ka in any::<[u64; 4]>(), kb in any::<[u64; 4]>()) {
    prop_assume!(ka != kb);
    let a = ValueHasher::<()>::with_key(HashKey::new(ka));
    let b = ValueHasher::<()>::with_key(HashKey::new(kb));
    prop_assert_eq!(a.hash64(&()), a.hash64(&()));
    prop_assert_ne!(a.hash64(&()), b.hash64(&()));
  }

  #[test]
  fn narrowing_is_modular(digest in any::<u64>()) {
    prop_assert_eq!(narrow_bits(digest, 32), digest & 0xffff_ffff);
    prop_assert_eq!(narrow(digest) as u64, narrow_bits(digest, usize::BITS));
  }
}
