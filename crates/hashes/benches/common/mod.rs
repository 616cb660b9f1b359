use criterion::{BenchmarkGroup, Throughput, measurement::WallTime};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reproducible noise, so no input is all zeros.
pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  ChaCha8Rng::seed_from_u64(seed ^ len as u64).fill_bytes(&mut out);
  out
}

/// Lengths around the 32-byte packet edge, then bulk payloads.
pub fn sized_inputs() -> Vec<(usize, Vec<u8>)> {
  [0usize, 1, 3, 8, 16, 31, 32, 33, 63, 64, 65, 128, 256, 1024, 4 * 1024, 64 * 1024]
    .into_iter()
    .map(|len| (len, random_bytes(len, 0xD1CE_B00C)))
    .collect()
}

/// Empty input is measured per call, everything else per byte.
pub fn set_throughput(group: &mut BenchmarkGroup<'_, WallTime>, len: usize) {
  group.throughput(match len {
    0 => Throughput::Elements(1),
    n => Throughput::Bytes(n as u64),
  });
}
