//! Fuzz target for the byte-view adapter.
//!
//! Any slice either rebuilds a value whose bytes equal the slice or is
//! rejected for its length.

#![no_main]

use flathash::{ByteViewError, HashKey, ValueHasher, flat};
use libfuzzer_sys::fuzz_target;

type Value = [u32; 5];

fuzz_target!(|data: &[u8]| {
  match flat::from_bytes::<Value>(data) {
    Ok(value) => {
      assert_eq!(flat::bytes_of(&value), data);
      let hasher = ValueHasher::<Value>::with_key(HashKey::new([1, 2, 3, 4]));
      let copy = flat::to_bytes(&value).into_value();
      assert!(flat::equals(&value, &copy));
      assert_eq!(hasher.hash(&value), hasher.hash(&copy));
    }
    Err(ByteViewError::LengthMismatch { expected, actual }) => {
      assert_eq!(expected, size_of::<Value>());
      assert_eq!(actual, data.len());
      assert_ne!(expected, actual);
    }
  }
});
