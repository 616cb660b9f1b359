//! Fuzz target for HighwayHash-64.
//!
//! Every kernel the CPU supports must agree, and arbitrary sequences of
//! streaming updates must reproduce the one-shot digest.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{Highway64, hash64_with_key, highway::kernel_test::verify_highway_kernels};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u64; 4],
  data: Vec<u8>,
  /// Streaming update lengths, reused cyclically. Empty means one update.
  splits: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let Input { key, data, splits } = input;

  assert_eq!(verify_highway_kernels(key, &data), Ok(()));

  let mut hasher = Highway64::new(key);
  let mut rest = data.as_slice();
  if splits.is_empty() {
    hasher.update(rest);
    rest = &[];
  }
  for split in splits.iter().map(|&s| usize::from(s)).cycle() {
    if rest.is_empty() {
      break;
    }
    let (head, tail) = rest.split_at(split.min(rest.len()).max(1));
    hasher.update(head);
    rest = tail;
  }

  assert_eq!(hasher.finalize(), hash64_with_key(key, &data), "highway streaming mismatch");
});
