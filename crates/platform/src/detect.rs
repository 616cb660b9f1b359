//! CPU detection.
//!
//! Combines compile-time features (`cfg!(target_feature = ...)`) with runtime
//! probing (`is_x86_feature_detected!` under `std`), caches the result, and
//! honours a user-supplied override for tests and bare metal.

use core::sync::atomic::{AtomicU64, Ordering};

use crate::caps::Caps;

/// Top bit of a stored word: "this word holds a value". No feature uses it.
const PRESENT: u64 = 1 << 63;

// ─────────────────────────────────────────────────────────────────────────────
// Override Support
// ─────────────────────────────────────────────────────────────────────────────

static OVERRIDE: AtomicU64 = AtomicU64::new(0);

/// Set or clear the capabilities override.
///
/// While set, [`caps()`] returns the override instead of detected caps.
/// The override can only take features away: it is intersected with
/// [`detect_uncached()`], so forcing a feature the CPU lacks never lets a
/// kernel run instructions the CPU cannot execute.
///
/// Kernel tables that were already resolved keep their selection, so call
/// this before the first hash.
pub fn set_caps_override(value: Option<Caps>) {
  let word = value.map_or(0, |caps| caps.intersection(detect_uncached()).0 | PRESENT);
  OVERRIDE.store(word, Ordering::Release);
}

#[inline]
#[must_use]
pub fn has_override() -> bool {
  OVERRIDE.load(Ordering::Acquire) & PRESENT != 0
}

#[inline]
fn unpack(word: u64) -> Option<Caps> {
  (word & PRESENT != 0).then_some(Caps(word & !PRESENT))
}

// ─────────────────────────────────────────────────────────────────────────────
// Main API
// ─────────────────────────────────────────────────────────────────────────────

/// Detected CPU capabilities.
///
/// Cached after the first call (`OnceLock` with `std`, an atomic word
/// otherwise). Under Miri, always portable-only.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  if cfg!(miri) {
    return Caps::NONE;
  }
  if let Some(caps) = unpack(OVERRIDE.load(Ordering::Acquire)) {
    return caps;
  }
  cached()
}

#[cfg(feature = "std")]
fn cached() -> Caps {
  use std::sync::OnceLock;
  static CACHED: OnceLock<Caps> = OnceLock::new();
  *CACHED.get_or_init(detect_uncached)
}

#[cfg(not(feature = "std"))]
fn cached() -> Caps {
  // Detection is idempotent, so racing initialisers store the same word.
  static CACHED: AtomicU64 = AtomicU64::new(0);
  if let Some(caps) = unpack(CACHED.load(Ordering::Acquire)) {
    return caps;
  }
  let caps = detect_uncached();
  CACHED.store(caps.0 | PRESENT, Ordering::Release);
  caps
}

/// Detect capabilities without caching or overrides.
#[must_use]
pub fn detect_uncached() -> Caps {
  #[allow(unused_mut)]
  let mut caps = caps_static();

  #[cfg(all(feature = "std", any(target_arch = "x86_64", target_arch = "x86")))]
  {
    use std::arch::is_x86_feature_detected as detected;

    use crate::caps::x86;

    let probes = [
      (detected!("sse2"), x86::SSE2),
      (detected!("avx"), x86::AVX),
      (detected!("avx2"), x86::AVX2),
    ];
    for (present, cap) in probes {
      if present {
        caps |= cap;
      }
    }
  }

  caps
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Static Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Capabilities known at compile time (`-C target-feature=...`,
/// `-C target-cpu=native`).
///
/// ```
/// const CAPS: platform::Caps = platform::caps_static();
///
/// #[cfg(target_arch = "x86_64")]
/// assert!(CAPS.has(platform::caps::x86::SSE2));
/// #[cfg(target_arch = "aarch64")]
/// assert!(CAPS.has(platform::caps::aarch64::NEON));
/// ```
#[inline(always)]
#[must_use]
pub const fn caps_static() -> Caps {
  #[allow(unused_macros)] // Only used on x86/x86_64
  macro_rules! detect {
    ($caps:ident; $($feature:literal => $cap:expr),+ $(,)?) => {
      $(if cfg!(target_feature = $feature) { $caps = $caps.union($cap); })+
    };
  }

  #[allow(unused_mut)]
  let mut result = Caps::NONE;

  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  {
    use crate::caps::x86;

    // x86_64 baseline: SSE2 is guaranteed
    #[cfg(target_arch = "x86_64")]
    {
      result = result.union(x86::SSE2);
    }

    detect!(result;
      "sse2" => x86::SSE2,
      "avx" => x86::AVX,
      "avx2" => x86::AVX2,
    );
  }

  #[cfg(target_arch = "aarch64")]
  {
    result = result.union(crate::caps::aarch64::NEON);
  }

  result
}
