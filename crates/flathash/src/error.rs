use thiserror::Error;

/// Failure to rebuild a flat value from a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ByteViewError {
  /// The slice is not exactly `size_of::<T>()` bytes long.
  #[error("byte view length mismatch: expected {expected} bytes, got {actual}")]
  LengthMismatch { expected: usize, actual: usize },
}
