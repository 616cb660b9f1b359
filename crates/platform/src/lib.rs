//! CPU capability detection for flathash.
//!
//! This crate is the single source of truth for "which kernels may run here".
//! Algorithm crates query [`caps()`] instead of doing ad-hoc detection.
//!
//! ```
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! if caps.has(x86::AVX2_READY) {
//!   // 256-bit kernels are safe to call
//! }
//! println!("{}", platform::describe());
//! ```
//!
//! # Design
//!
//! 1. **One API**: algorithms query `platform::caps()`.
//! 2. **Zero-cost when possible**: compile-time features come from `cfg!`.
//! 3. **Cached otherwise**: runtime detection runs once.
//! 4. **Miri-safe**: under Miri, always portable-only caps.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

use core::fmt;

pub use caps::{Arch, Caps};
pub use detect::{caps, caps_static, detect_uncached, has_override, set_caps_override};

/// Human-readable summary of the platform: architecture plus detected features.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Description {
  pub arch: Arch,
  pub caps: Caps,
}

/// Describe the current platform.
#[inline]
#[must_use]
pub fn describe() -> Description {
  Description {
    arch: Arch::current(),
    caps: caps(),
  }
}

impl fmt::Display for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Caps({}, [", self.arch)?;
    for (i, name) in self.caps.names().enumerate() {
      if i > 0 {
        f.write_str(", ")?;
      }
      f.write_str(name)?;
    }
    f.write_str("])")
  }
}

impl fmt::Debug for Description {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(self, f)
  }
}
