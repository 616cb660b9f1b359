//! CPU capability representation.
//!
//! [`Caps`] answers one question: "which instructions may this process run?"
//! Kernels declare the caps they require and the dispatcher checks them with
//! [`Caps::has`].
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86/x86_64 features
//! - Bits 32-62: aarch64 features
//! - Bit 63: reserved (presence flag in the detection caches)

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 64-bit feature bitset.
///
/// `Caps` is `Copy`, `Send`, and `Sync`.
///
/// # Example
///
/// ```
/// use platform::caps::{Caps, x86};
///
/// let caps = Caps::NONE | x86::SSE2;
/// assert!(caps.has(x86::SSE2));
/// assert!(!caps.has(x86::AVX2_READY));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  /// Empty capability set (no features).
  pub const NONE: Self = Self(0);

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Remove `other` from this set.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Single-bit capability set. `bit` must be below 64.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Iterate over the names of the features present in this set.
  pub fn names(self) -> impl Iterator<Item = &'static str> {
    FEATURE_NAMES
      .iter()
      .filter(move |(cap, _)| self.has(*cap))
      .map(|(_, name)| *name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self::Output {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl core::fmt::Debug for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_list().entries(self.names()).finish()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  X86,
  Aarch64,
  Wasm32,
  #[default]
  Other,
}

impl Arch {
  /// Architecture of the current compilation target.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    if cfg!(target_arch = "x86_64") {
      Self::X86_64
    } else if cfg!(target_arch = "x86") {
      Self::X86
    } else if cfg!(target_arch = "aarch64") {
      Self::Aarch64
    } else if cfg!(target_arch = "wasm32") {
      Self::Wasm32
    } else {
      Self::Other
    }
  }

  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::X86 => "x86",
      Self::Aarch64 => "aarch64",
      Self::Wasm32 => "wasm32",
      Self::Other => "other",
    }
  }
}

impl core::fmt::Display for Arch {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-31)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 CPU features used by the hash kernels.
pub mod x86 {
  use super::Caps;

  pub const SSE2: Caps = Caps::bit(0);
  pub const AVX: Caps = Caps::bit(1);
  pub const AVX2: Caps = Caps::bit(2);

  /// Everything the 256-bit HighwayHash kernel touches.
  pub const AVX2_READY: Caps = Caps(AVX.0 | AVX2.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 32-62)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 CPU features.
pub mod aarch64 {
  use super::Caps;

  pub const NEON: Caps = Caps::bit(32); // Baseline on AArch64
}

const FEATURE_NAMES: &[(Caps, &str)] = &[
  (x86::SSE2, "sse2"),
  (x86::AVX, "avx"),
  (x86::AVX2, "avx2"),
  (aarch64::NEON, "neon"),
];

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::vec::Vec;

  use super::*;

  #[test]
  fn has_requires_every_bit() {
    let caps = x86::SSE2 | x86::AVX2;
    assert!(caps.has(x86::SSE2));
    assert!(caps.has(x86::AVX2));
    assert!(!caps.has(x86::AVX2_READY), "AVX2_READY also needs AVX");
    assert!(caps.has(Caps::NONE));
  }

  #[test]
  fn set_algebra() {
    let a = x86::SSE2 | x86::AVX;
    let b = x86::AVX | x86::AVX2;
    assert_eq!(a & b, x86::AVX);
    assert_eq!((a | b).count(), 3);
    assert_eq!(a.difference(b), x86::SSE2);
    assert!(Caps::NONE.is_empty());
  }

  #[test]
  fn names_follow_bits() {
    let names: Vec<_> = (x86::AVX2_READY | aarch64::NEON).names().collect();
    assert_eq!(names, ["avx", "avx2", "neon"]);
  }
}
