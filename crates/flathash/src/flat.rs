//! Byte views of flat values.
//!
//! A *flat* value is one whose in-memory bytes fully determine it: no
//! pointers, no implicit padding, every bit pattern valid. That is exactly
//! [`bytemuck::Pod`], so the capability is checked by the compiler and a type
//! that fails it never reaches these functions.
//!
//! Equality here is byte equality. For floats that means `0.0` and `-0.0`
//! differ and a NaN equals itself when the bits match.

use core::{
  fmt,
  hash::{Hash, Hasher},
  mem::size_of,
  ops::Deref,
};

use bytemuck::Pod;

use crate::error::ByteViewError;

/// Values that may be hashed and compared through their raw bytes.
///
/// Implemented for every [`Pod`] type. Derive `Pod` and `Zeroable` on a
/// `#[repr(C)]` struct to opt in; the derive rejects padding.
pub trait Flat: Pod {}

impl<T: Pod> Flat for T {}

/// Borrowed byte view of `value`. Zero-copy.
#[inline]
#[must_use]
pub fn bytes_of<T: Flat>(value: &T) -> &[u8] {
  bytemuck::bytes_of(value)
}

/// Owned copy of the exact in-memory bytes of `value`.
#[inline]
#[must_use]
pub fn to_bytes<T: Flat>(value: &T) -> ByteSequence<T> {
  ByteSequence { value: *value }
}

/// Rebuild a value from its bytes. `bytes` may be unaligned.
///
/// # Errors
///
/// [`ByteViewError::LengthMismatch`] unless `bytes.len() == size_of::<T>()`.
#[inline]
pub fn from_bytes<T: Flat>(bytes: &[u8]) -> Result<T, ByteViewError> {
  bytemuck::try_pod_read_unaligned(bytes).map_err(|_| ByteViewError::LengthMismatch {
    expected: size_of::<T>(),
    actual: bytes.len(),
  })
}

/// True when both values have identical byte views.
#[inline]
#[must_use]
pub fn equals<T: Flat>(a: &T, b: &T) -> bool {
  bytes_of(a) == bytes_of(b)
}

#[inline]
#[must_use]
pub fn not_equals<T: Flat>(a: &T, b: &T) -> bool {
  !equals(a, b)
}

// ─────────────────────────────────────────────────────────────────────────────
// ByteSequence
// ─────────────────────────────────────────────────────────────────────────────

/// The bytes of one `T`, always exactly `size_of::<T>()` long.
#[derive(Clone, Copy)]
pub struct ByteSequence<T: Flat> {
  value: T,
}

impl<T: Flat> ByteSequence<T> {
  /// Number of bytes, known at compile time.
  pub const LEN: usize = size_of::<T>();

  #[inline]
  #[must_use]
  pub fn as_bytes(&self) -> &[u8] {
    bytes_of(&self.value)
  }

  /// Reinterpret the bytes as a `T`. Cannot fail: the length is fixed.
  #[inline]
  #[must_use]
  pub fn into_value(self) -> T {
    self.value
  }
}

impl<T: Flat> Deref for ByteSequence<T> {
  type Target = [u8];

  #[inline]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<T: Flat> AsRef<[u8]> for ByteSequence<T> {
  #[inline]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<T: Flat> PartialEq for ByteSequence<T> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<T: Flat> Eq for ByteSequence<T> {}

impl<T: Flat> fmt::Debug for ByteSequence<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ByteSequence(")?;
    for byte in self.as_bytes() {
      write!(f, "{byte:02x}")?;
    }
    f.write_str(")")
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// ByteEq
// ─────────────────────────────────────────────────────────────────────────────

/// Wrapper whose `PartialEq`, `Eq` and `Hash` follow the byte view.
///
/// Lets flat values key a `HashMap`, including types such as `f64` fields
/// that have no `Eq` of their own.
///
/// ```
/// use std::collections::HashMap;
///
/// use flathash::{HighwayBuildHasher, flat::ByteEq};
///
/// let mut seen: HashMap<ByteEq<[f32; 2]>, u32, _> = HashMap::with_hasher(HighwayBuildHasher::new());
/// *seen.entry(ByteEq([1.0, 2.0])).or_default() += 1;
/// *seen.entry(ByteEq([1.0, 2.0])).or_default() += 1;
/// assert_eq!(seen[&ByteEq([1.0, 2.0])], 2);
/// ```
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct ByteEq<T: Flat>(pub T);

impl<T: Flat> ByteEq<T> {
  #[inline]
  #[must_use]
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T: Flat> From<T> for ByteEq<T> {
  #[inline]
  fn from(value: T) -> Self {
    Self(value)
  }
}

impl<T: Flat> PartialEq for ByteEq<T> {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    equals(&self.0, &other.0)
  }
}

impl<T: Flat> Eq for ByteEq<T> {}

impl<T: Flat> Hash for ByteEq<T> {
  #[inline]
  fn hash<H: Hasher>(&self, state: &mut H) {
    state.write(bytes_of(&self.0));
  }
}

impl<T: Flat + fmt::Debug> fmt::Debug for ByteEq<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("ByteEq").field(&self.0).finish()
  }
}
